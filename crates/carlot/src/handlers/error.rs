use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use carlot_core::storage::{repository_error_to_status_code, RepositoryError};

/// JSON body of every error response.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// Application error type that wraps `anyhow::Error`.
///
/// Every failure is answered with 500. Handlers attach an operation message
/// with `anyhow::Context`; a missing row is reported with its entity message,
/// anything else with the operation message while the cause is only logged.
pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let repo_error = self.0.downcast_ref::<RepositoryError>();

        let status_code = repo_error
            .map(repository_error_to_status_code)
            .and_then(|code| StatusCode::from_u16(code).ok())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let message = match repo_error {
            Some(error) if error.is_not_found() => error.to_string(),
            _ => self.0.to_string(),
        };

        if repo_error.is_some_and(RepositoryError::is_not_found) {
            tracing::warn!(error = %format!("{:#}", self.0), "Request rejected");
        } else {
            tracing::error!(error = %format!("{:#}", self.0), "Request failed");
        }

        (status_code, Json(ErrorBody { error: message })).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use carlot_core::storage::EntityKind;
    use http_body_util::BodyExt;

    async fn body_json(response: Response) -> serde_json::Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_keeps_entity_message() {
        let result: Result<(), RepositoryError> = Err(RepositoryError::NotFound {
            entity: EntityKind::User,
            id: 999,
        });
        let error = AppError(result.context("Erro ao atualizar usuário").unwrap_err());

        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "Usuário não encontrado"})
        );
    }

    #[tokio::test]
    async fn test_store_failure_uses_operation_message() {
        let result: Result<(), RepositoryError> =
            Err(RepositoryError::QueryFailed("disk I/O error".to_string()));
        let error = AppError(result.context("Erro ao buscar usuários").unwrap_err());

        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "Erro ao buscar usuários"})
        );
    }

    #[tokio::test]
    async fn test_conflict_uses_operation_message() {
        let result: Result<(), RepositoryError> = Err(RepositoryError::Conflict {
            entity: EntityKind::Car,
            reason: "FOREIGN KEY constraint failed".to_string(),
        });
        let error = AppError(result.context("Erro ao inserir carro").unwrap_err());

        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "Erro ao inserir carro"})
        );
    }

    #[tokio::test]
    async fn test_unknown_error_is_500() {
        let error = AppError::from(anyhow::anyhow!("boom"));

        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await, serde_json::json!({"error": "boom"}));
    }
}
