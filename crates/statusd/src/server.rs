//! HTTP server for statusd.

use crate::config::Config;
use crate::feed::StatusFeedClient;
use crate::routes;
use anyhow::{Context, Result};
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Application state shared across handlers.
pub struct AppState {
    pub config: Config,
    pub feed: StatusFeedClient,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let feed = StatusFeedClient::new(&config)?;
        Ok(Self { config, feed })
    }
}

/// Assemble the full router. Split out so tests can drive it without a
/// listener.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(routes::skill_routes())
        .merge(routes::health_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Run the webhook server until the process is stopped.
pub async fn run(state: AppState) -> Result<()> {
    let addr = state.config.bind_addr.clone();
    let app = app(Arc::new(state));

    let listener = tokio::net::TcpListener::bind(addr.as_str())
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("  Listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
