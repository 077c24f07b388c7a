//! HTTP server for the ReelRecs recommendation engine.
//!
//! Loads the dataset once, then serves options and recommendations until
//! interrupted. See `ServerConfig` for flags and environment variables.

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use server::ServerConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::parse();
    info!(
        "Starting ReelRecs server ({} mode, dataset {})",
        config.dataset.mode,
        config.dataset.dataset.display()
    );

    let orchestrator = server::load_orchestrator(&config.dataset.dataset, config.dataset.mode)?;
    server::serve(orchestrator, &config.listen).await
}
