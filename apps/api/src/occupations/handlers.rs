//! Axum route handlers for the Occupations API.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::occupations::models::{OccupationReport, SearchResults, SelectedOccupation};
use crate::occupations::report::build_report;
use crate::occupations::search::search;
use crate::state::AppState;

pub const DEFAULT_RESULT_SIZE: u32 = 10;
pub const MAX_RESULT_SIZE: u32 = 100;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub keyword: String,
    pub result_size: Option<u32>,
}

/// A selection event from the search results, plus an optional list length.
#[derive(Debug, Deserialize)]
pub struct ReportRequest {
    #[serde(flatten)]
    pub occupation: SelectedOccupation,
    pub top_n: Option<usize>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/occupations/search?keyword=..&result_size=..
///
/// Returns the first `result_size` matches in the order O*NET ranks them.
pub async fn handle_search(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<SearchResults>, AppError> {
    let keyword = params.keyword.trim();
    if keyword.is_empty() {
        return Err(AppError::Validation("keyword cannot be empty".to_string()));
    }

    let result_size = params.result_size.unwrap_or(DEFAULT_RESULT_SIZE);
    if !(1..=MAX_RESULT_SIZE).contains(&result_size) {
        return Err(AppError::Validation(format!(
            "result_size must be between 1 and {MAX_RESULT_SIZE}"
        )));
    }

    let results = search(
        state.source.as_ref(),
        &state.endpoints,
        keyword,
        1,
        result_size,
    )
    .await?;

    Ok(Json(results))
}

/// POST /api/v1/occupations/report
///
/// Builds the detail report for a selected occupation. Missing optional sections
/// come back inline; only an overview failure fails the request.
pub async fn handle_report(
    State(state): State<AppState>,
    Json(request): Json<ReportRequest>,
) -> Result<Json<OccupationReport>, AppError> {
    validate_code(&request.occupation.code)?;

    let top_n = request.top_n.unwrap_or(state.config.report_top_n);
    let report = build_report(
        state.source.as_ref(),
        &state.endpoints,
        &request.occupation,
        top_n,
    )
    .await?;

    Ok(Json(report))
}

/// Codes are interpolated into endpoint paths, so only O*NET-SOC characters pass.
fn validate_code(code: &str) -> Result<(), AppError> {
    if code.is_empty() {
        return Err(AppError::Validation("code cannot be empty".to_string()));
    }
    if !code
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.')
    {
        return Err(AppError::Validation(format!(
            "code '{code}' is not a valid occupation code"
        )));
    }
    Ok(())
}
