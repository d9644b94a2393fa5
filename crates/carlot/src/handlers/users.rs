use anyhow::Context;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use carlot_core::catalog::{DeleteConfirmation, User, UserFields};
use carlot_core::storage::EntityKind;

use crate::{
    handlers::{AppError, LenientJson},
    state::AppState,
};

/// Create a new user (POST /users).
pub async fn create_user(
    State(state): State<AppState>,
    LenientJson(payload): LenientJson<UserFields>,
) -> Result<impl IntoResponse, AppError> {
    let user = state
        .users
        .create_user(payload)
        .await
        .context("Erro ao inserir usuário")?;

    tracing::info!(user_id = user.id, "Created new user");

    Ok((StatusCode::CREATED, Json(user)))
}

/// List all users (GET /users).
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    let users = state
        .users
        .list_users()
        .await
        .context("Erro ao buscar usuários")?;

    Ok(Json(users))
}

/// Update a user by ID (PUT /users/{id}).
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    LenientJson(payload): LenientJson<UserFields>,
) -> Result<Json<User>, AppError> {
    let user = state
        .users
        .update_user(id, payload)
        .await
        .context("Erro ao atualizar usuário")?;

    tracing::info!(user_id = id, "Updated user");

    Ok(Json(user))
}

/// Delete a user by ID (DELETE /users/{id}).
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteConfirmation>, AppError> {
    state
        .users
        .delete_user(id)
        .await
        .context("Erro ao deletar usuário")?;

    tracing::info!(user_id = id, "Deleted user");

    Ok(Json(DeleteConfirmation::for_entity(EntityKind::User)))
}
