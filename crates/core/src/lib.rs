//! Core types for carlot.
//!
//! Pure data types and trait definitions shared by the server. Nothing in
//! this crate performs I/O.

pub mod catalog;
pub mod serde;
pub mod storage;
