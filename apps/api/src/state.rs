use std::sync::Arc;

use crate::config::Config;
use crate::onet_client::{Endpoints, OccupationSource};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The O*NET gateway. Read-only after startup; credentials live inside it.
    pub source: Arc<dyn OccupationSource>,
    pub endpoints: Endpoints,
    pub config: Config,
}
