use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::occupations::report::ReportError;
use crate::occupations::search::SearchError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Report unavailable: {0}")]
    ReportUnavailable(String),
}

impl From<SearchError> for AppError {
    fn from(e: SearchError) -> Self {
        match &e {
            SearchError::InvalidRange { .. } => AppError::Validation(e.to_string()),
            SearchError::Gateway(_) | SearchError::Normalize(_) => {
                AppError::Upstream(e.to_string())
            }
        }
    }
}

impl From<ReportError> for AppError {
    fn from(e: ReportError) -> Self {
        AppError::ReportUnavailable(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Upstream(msg) => {
                tracing::error!("Upstream error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "UPSTREAM_ERROR",
                    format!("The occupation service request failed: {msg}"),
                )
            }
            AppError::ReportUnavailable(msg) => {
                tracing::error!("Report unavailable: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "REPORT_UNAVAILABLE",
                    format!("The occupation report could not be built: {msg}"),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
