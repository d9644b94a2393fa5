//! SQLite error mapping.
//!
//! Maps `tokio_rusqlite::Error` and `rusqlite::Error` to `RepositoryError` from `carlot_core::storage`.
//! Constraint failures become `Conflict`, a missing row with a known id becomes `NotFound`.

use carlot_core::storage::{EntityKind, RepositoryError};
use rusqlite::ffi;

/// Extended result codes reported for constraint violations.
const CONSTRAINT_CODES: [i32; 5] = [
    ffi::SQLITE_CONSTRAINT_FOREIGNKEY,
    ffi::SQLITE_CONSTRAINT_UNIQUE,
    ffi::SQLITE_CONSTRAINT_PRIMARYKEY,
    ffi::SQLITE_CONSTRAINT_NOTNULL,
    ffi::SQLITE_CONSTRAINT_CHECK,
];

/// Maps a rusqlite error to a RepositoryError.
///
/// # Error Mapping
///
/// - `SQLITE_CONSTRAINT_*` (foreign key, unique, primary key, not null, check) → `Conflict`
/// - `CannotOpen` → `ConnectionFailed`
/// - `QueryReturnedNoRows` with a known id → `NotFound`
/// - All other errors → `QueryFailed`
fn map_rusqlite_error(
    err: &rusqlite::Error,
    entity: EntityKind,
    id: Option<i64>,
) -> RepositoryError {
    match err {
        rusqlite::Error::SqliteFailure(sqlite_err, message)
            if CONSTRAINT_CODES.contains(&sqlite_err.extended_code) =>
        {
            RepositoryError::Conflict {
                entity,
                reason: message
                    .clone()
                    .unwrap_or_else(|| sqlite_err.to_string()),
            }
        }

        rusqlite::Error::SqliteFailure(sqlite_err, _)
            if sqlite_err.code == rusqlite::ErrorCode::CannotOpen =>
        {
            RepositoryError::ConnectionFailed(format!("Cannot open database: {err}"))
        }

        rusqlite::Error::QueryReturnedNoRows => match id {
            Some(id) => RepositoryError::NotFound { entity, id },
            None => RepositoryError::QueryFailed(err.to_string()),
        },

        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}

/// Maps a tokio_rusqlite error to a RepositoryError.
///
/// This is the main entry point for error mapping in async code.
/// It extracts the inner `rusqlite::Error` if present, otherwise
/// maps to a generic error.
pub fn map_tokio_rusqlite_error(
    err: tokio_rusqlite::Error,
    entity: EntityKind,
) -> RepositoryError {
    map_error(err, entity, None)
}

/// Maps a tokio_rusqlite error with a known ID to a RepositoryError.
///
/// Use this variant for id-scoped statements so that an unmatched row
/// surfaces as `NotFound`.
pub fn map_tokio_rusqlite_error_with_id(
    err: tokio_rusqlite::Error,
    entity: EntityKind,
    id: i64,
) -> RepositoryError {
    map_error(err, entity, Some(id))
}

fn map_error(err: tokio_rusqlite::Error, entity: EntityKind, id: Option<i64>) -> RepositoryError {
    match &err {
        tokio_rusqlite::Error::Rusqlite(rusqlite_err) => map_rusqlite_error(rusqlite_err, entity, id),
        tokio_rusqlite::Error::ConnectionClosed | tokio_rusqlite::Error::Close(_) => {
            RepositoryError::ConnectionFailed("Connection closed unexpectedly".to_string())
        }
        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}
