//! Root route handler.

/// Plain-text greeting served at `/`.
pub const WELCOME_MESSAGE: &str = "Bem-vindo ao servidor com SQLite e Axum!";

/// Handler for GET /
pub async fn welcome() -> &'static str {
    WELCOME_MESSAGE
}
