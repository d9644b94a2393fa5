use axum::{
    http::{header, Method},
    routing::{get, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{
        cars::{create_car, delete_car, list_cars, update_car},
        categories::{create_category, delete_category, list_categories, update_category},
        root::welcome,
        users::{create_user, delete_user, list_users, update_user},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(welcome))
        // User routes
        .route("/users", get(list_users).post(create_user))
        .route("/users/{id}", put(update_user).delete(delete_user))
        // Category routes
        .route("/categories", get(list_categories).post(create_category))
        .route(
            "/categories/{id}",
            put(update_category).delete(delete_category),
        )
        // Car routes
        .route("/cars", get(list_cars).post(create_car))
        .route("/cars/{id}", put(update_car).delete(delete_car))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
