mod config;
mod errors;
mod occupations;
mod onet_client;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::onet_client::{Endpoints, OnetClient};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing credentials)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Vocation API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize O*NET client
    let endpoints = Endpoints::new(&config.onet_base_url);
    let client = OnetClient::new(config.onet_username.clone(), config.onet_password.clone())?;
    info!(
        "O*NET client initialized (base: {}, user: {})",
        endpoints.base_url(),
        config.onet_username
    );
    info!("Detail reports default to top {} items", config.report_top_n);

    let state = AppState {
        source: Arc::new(client),
        endpoints,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
