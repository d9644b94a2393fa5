use anyhow::Context;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use carlot_core::catalog::{Car, CarFields, CarListing, DeleteConfirmation};
use carlot_core::storage::EntityKind;

use crate::{
    handlers::{AppError, LenientJson},
    state::AppState,
};

/// Create a new car (POST /cars).
pub async fn create_car(
    State(state): State<AppState>,
    LenientJson(payload): LenientJson<CarFields>,
) -> Result<impl IntoResponse, AppError> {
    let car = state
        .cars
        .create_car(payload)
        .await
        .context("Erro ao inserir carro")?;

    tracing::info!(car_id = car.id, category_id = ?car.category_id, "Created new car");

    Ok((StatusCode::CREATED, Json(car)))
}

/// List all cars with their category names (GET /cars).
pub async fn list_cars(State(state): State<AppState>) -> Result<Json<Vec<CarListing>>, AppError> {
    let cars = state
        .cars
        .list_cars()
        .await
        .context("Erro ao buscar carros")?;

    Ok(Json(cars))
}

/// Update a car by ID (PUT /cars/{id}).
pub async fn update_car(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    LenientJson(payload): LenientJson<CarFields>,
) -> Result<Json<Car>, AppError> {
    let car = state
        .cars
        .update_car(id, payload)
        .await
        .context("Erro ao atualizar carro")?;

    tracing::info!(car_id = id, category_id = ?car.category_id, "Updated car");

    Ok(Json(car))
}

/// Delete a car by ID (DELETE /cars/{id}).
pub async fn delete_car(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteConfirmation>, AppError> {
    state
        .cars
        .delete_car(id)
        .await
        .context("Erro ao deletar carro")?;

    tracing::info!(car_id = id, "Deleted car");

    Ok(Json(DeleteConfirmation::for_entity(EntityKind::Car)))
}
