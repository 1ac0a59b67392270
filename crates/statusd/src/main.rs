//! statusd entry point.

use anyhow::{Context, Result};
use statusd::config::Config;
use statusd::server::{self, AppState};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("[BOOT] statusd v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env().context("Failed to load configuration")?;
    info!("[BOOT] Config loaded (feed: {})", config.status_page_url);

    let state = AppState::new(config).context("Failed to build status feed client")?;
    info!("[READY] meridian-status-skill operational");

    server::run(state).await.context("Webhook server error")?;

    Ok(())
}
