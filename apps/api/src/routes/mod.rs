pub mod health;
pub mod home;

use axum::{http::Uri, routing::get, Router};

use crate::errors::AppError;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/home/bento", get(home::handle_get_bento))
        .route(
            "/api/v1/home/placeholders/:kind",
            get(home::handle_get_placeholder),
        )
        .fallback(not_found)
        .with_state(state)
}
