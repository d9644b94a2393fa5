use anyhow::Context;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use carlot_core::catalog::{Category, CategoryFields, DeleteConfirmation};
use carlot_core::storage::EntityKind;

use crate::{
    handlers::{AppError, LenientJson},
    state::AppState,
};

/// Create a new category (POST /categories).
pub async fn create_category(
    State(state): State<AppState>,
    LenientJson(payload): LenientJson<CategoryFields>,
) -> Result<impl IntoResponse, AppError> {
    let category = state
        .categories
        .create_category(payload)
        .await
        .context("Erro ao inserir categoria")?;

    tracing::info!(category_id = category.id, "Created new category");

    Ok((StatusCode::CREATED, Json(category)))
}

/// List all categories (GET /categories).
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<Category>>, AppError> {
    let categories = state
        .categories
        .list_categories()
        .await
        .context("Erro ao buscar categorias")?;

    Ok(Json(categories))
}

/// Update a category by ID (PUT /categories/{id}).
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    LenientJson(payload): LenientJson<CategoryFields>,
) -> Result<Json<Category>, AppError> {
    let category = state
        .categories
        .update_category(id, payload)
        .await
        .context("Erro ao atualizar categoria")?;

    tracing::info!(category_id = id, "Updated category");

    Ok(Json(category))
}

/// Delete a category by ID (DELETE /categories/{id}).
///
/// Cars in this category are kept; their category reference is cleared.
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteConfirmation>, AppError> {
    state
        .categories
        .delete_category(id)
        .await
        .context("Erro ao deletar categoria")?;

    tracing::info!(category_id = id, "Deleted category");

    Ok(Json(DeleteConfirmation::for_entity(EntityKind::Category)))
}
