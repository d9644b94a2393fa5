//! Storage backend implementations.
//!
//! This module provides the concrete implementation of the repository traits
//! defined in `carlot_core::storage`. SQLite is the only backend: a single
//! embedded database file owned by [`SqliteRepository`].

pub mod sqlite;

pub use sqlite::SqliteRepository;
