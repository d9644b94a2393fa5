//! Pure functions for mapping repository errors to HTTP status codes.

use super::RepositoryError;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// Every variant is reported as 500 (Internal Server Error), including a
/// missing row. The variant still decides which message reaches the caller.
///
/// # Examples
///
/// ```
/// use carlot_core::storage::{repository_error_to_status_code, EntityKind, RepositoryError};
///
/// let error = RepositoryError::NotFound {
///     entity: EntityKind::User,
///     id: 42,
/// };
/// assert_eq!(repository_error_to_status_code(&error), 500);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::NotFound { .. } => 500,
        RepositoryError::Conflict { .. } => 500,
        RepositoryError::ConnectionFailed(_) => 500,
        RepositoryError::QueryFailed(_) => 500,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::EntityKind;

    #[test]
    fn test_not_found_maps_to_500() {
        let error = RepositoryError::NotFound {
            entity: EntityKind::Category,
            id: 10,
        };
        assert_eq!(repository_error_to_status_code(&error), 500);
    }

    #[test]
    fn test_conflict_maps_to_500() {
        let error = RepositoryError::Conflict {
            entity: EntityKind::Car,
            reason: "FOREIGN KEY constraint failed".to_string(),
        };
        assert_eq!(repository_error_to_status_code(&error), 500);
    }

    #[test]
    fn test_store_failures_map_to_500() {
        let connection = RepositoryError::ConnectionFailed("closed".to_string());
        let query = RepositoryError::QueryFailed("disk I/O error".to_string());

        assert_eq!(repository_error_to_status_code(&connection), 500);
        assert_eq!(repository_error_to_status_code(&query), 500);
    }
}
