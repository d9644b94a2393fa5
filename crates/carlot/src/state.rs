//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. Repositories are trait objects, so tests can hand the
//! router any implementation.

use std::sync::Arc;

use carlot_core::storage::{CarRepository, CategoryRepository, UserRepository};

use crate::{config::Config, storage::SqliteRepository};

/// Shared application state.
///
/// This is cloned for each request handler and contains the repository
/// trait objects for database access.
#[derive(Clone)]
pub struct AppState {
    /// User repository.
    pub users: Arc<dyn UserRepository>,
    /// Category repository.
    pub categories: Arc<dyn CategoryRepository>,
    /// Car repository.
    pub cars: Arc<dyn CarRepository>,
}

impl AppState {
    /// Creates state where one store backs all three repositories.
    pub fn new<R>(repository: Arc<R>) -> Self
    where
        R: UserRepository + CategoryRepository + CarRepository + 'static,
    {
        Self {
            users: repository.clone(),
            categories: repository.clone(),
            cars: repository,
        }
    }

    /// Opens the SQLite database named by the configuration and builds state on it.
    pub async fn sqlite(config: &Config) -> anyhow::Result<Self> {
        let repository = SqliteRepository::new(&config.sqlite_path).await?;

        tracing::info!(path = %config.sqlite_path, "Connected to SQLite database");

        Ok(Self::new(Arc::new(repository)))
    }

    /// Creates state backed by a fresh in-memory SQLite database.
    #[cfg(test)]
    pub async fn in_memory() -> Self {
        let repository = SqliteRepository::new_in_memory()
            .await
            .expect("Failed to open in-memory database");

        Self::new(Arc::new(repository))
    }
}
