pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::occupations::handlers;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/occupations/search",
            get(handlers::handle_search),
        )
        .route(
            "/api/v1/occupations/report",
            post(handlers::handle_report),
        )
        .fallback(not_found)
        .with_state(state)
}
