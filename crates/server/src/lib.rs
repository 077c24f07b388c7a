//! Server crate for the ReelRecs recommendation engine.
//!
//! This crate contains the orchestrator that composes the filter engine with
//! a ranker, and the HTTP API that exposes it.

pub mod api;
pub mod config;
pub mod error;
pub mod orchestrator;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use data_loader::{Corpus, RankingMode};

pub use config::{DatasetArgs, ListenArgs, ServerConfig};
pub use error::{RecommendError, RecommendResult};
pub use orchestrator::RecommendationOrchestrator;

/// Load the dataset and build an orchestrator for `mode`.
///
/// Any loading failure is fatal; no partial state is returned.
pub fn load_orchestrator(dataset: &Path, mode: RankingMode) -> Result<RecommendationOrchestrator> {
    let corpus = Corpus::load(dataset, mode)
        .with_context(|| format!("Failed to load movie dataset from {}", dataset.display()))?;
    Ok(RecommendationOrchestrator::new(Arc::new(corpus)))
}

/// Serve the HTTP API until the process is interrupted
pub async fn serve(orchestrator: RecommendationOrchestrator, listen: &ListenArgs) -> Result<()> {
    let cors = api::cors_layer(listen.cors_allow_origin.as_deref())?;
    let app = api::create_router(api::AppState::new(orchestrator), cors);

    let addr = listen.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // No signal handler available; run until killed
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
