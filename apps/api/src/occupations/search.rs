//! Keyword search over the occupation catalog.

use thiserror::Error;
use tracing::info;

use crate::occupations::models::SearchResults;
use crate::occupations::normalize::{self, NormalizeError};
use crate::occupations::payloads::SearchPayload;
use crate::onet_client::{Endpoints, GatewayError, OccupationSource};

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Invalid result range {start}-{end}: start must be >= 1 and end >= start")]
    InvalidRange { start: u32, end: u32 },

    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error(transparent)]
    Normalize(#[from] NormalizeError),
}

/// Searches occupations by keyword, returning rows `start..=end` in service order.
///
/// The echoed `keyword`, `start` and `end` come from the response when present,
/// otherwise from the request.
pub async fn search(
    source: &dyn OccupationSource,
    endpoints: &Endpoints,
    keyword: &str,
    start: u32,
    end: u32,
) -> Result<SearchResults, SearchError> {
    if start < 1 || end < start {
        return Err(SearchError::InvalidRange { start, end });
    }

    let start_param = start.to_string();
    let end_param = end.to_string();
    let value = source
        .fetch(
            &endpoints.search(),
            &[
                ("keyword", keyword),
                ("start", start_param.as_str()),
                ("end", end_param.as_str()),
            ],
        )
        .await?;

    let payload: SearchPayload =
        serde_json::from_value(value).map_err(NormalizeError::Payload)?;

    let results: Vec<_> = payload
        .occupation
        .into_iter()
        .map(normalize::search_row)
        .collect();

    info!("Search '{keyword}' returned {} occupations", results.len());

    Ok(SearchResults {
        keyword: payload.keyword.unwrap_or_else(|| keyword.to_string()),
        start: payload.start.unwrap_or(start),
        end: payload.end.unwrap_or(end),
        total: payload.total,
        results,
    })
}
