use thiserror::Error;

use super::EntityKind;

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// An update or delete matched no row.
    #[error("{}", .entity.not_found_message())]
    NotFound { entity: EntityKind, id: i64 },
    /// The store rejected the write because of a constraint.
    #[error("{entity} constraint violation: {reason}")]
    Conflict { entity: EntityKind, reason: String },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl RepositoryError {
    /// Returns true when an id-scoped write matched no row.
    pub fn is_not_found(&self) -> bool {
        matches!(self, RepositoryError::NotFound { .. })
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display_uses_entity_message() {
        let error = RepositoryError::NotFound {
            entity: EntityKind::User,
            id: 999,
        };
        assert_eq!(error.to_string(), "Usuário não encontrado");
    }

    #[test]
    fn test_not_found_display_for_category_and_car() {
        let category = RepositoryError::NotFound {
            entity: EntityKind::Category,
            id: 1,
        };
        let car = RepositoryError::NotFound {
            entity: EntityKind::Car,
            id: 1,
        };
        assert!(category.to_string().contains("não encontrada"));
        assert!(car.to_string().contains("não encontrado"));
    }

    #[test]
    fn test_conflict_display() {
        let error = RepositoryError::Conflict {
            entity: EntityKind::Car,
            reason: "FOREIGN KEY constraint failed".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Car constraint violation: FOREIGN KEY constraint failed"
        );
    }

    #[test]
    fn test_connection_failed_display() {
        let error = RepositoryError::ConnectionFailed("unable to open database file".to_string());
        assert_eq!(
            error.to_string(),
            "Connection failed: unable to open database file"
        );
    }

    #[test]
    fn test_query_failed_display() {
        let error = RepositoryError::QueryFailed("disk I/O error".to_string());
        assert_eq!(error.to_string(), "Query failed: disk I/O error");
    }

    #[test]
    fn test_not_found_classification() {
        assert!(RepositoryError::NotFound {
            entity: EntityKind::Car,
            id: 2
        }
        .is_not_found());
        assert!(!RepositoryError::Conflict {
            entity: EntityKind::Car,
            reason: "x".to_string()
        }
        .is_not_found());
        assert!(!RepositoryError::QueryFailed("x".to_string()).is_not_found());
        assert!(!RepositoryError::ConnectionFailed("x".to_string()).is_not_found());
    }
}
