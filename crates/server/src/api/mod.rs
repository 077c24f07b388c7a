//! HTTP API over the recommendation orchestrator.
//!
//! - `GET  /health`
//! - `GET  /api/options/:category`
//! - `POST /api/recommend`
//!
//! Errors are returned as `{"error": "..."}` with a 4xx status.

pub mod handlers;
pub mod routes;

use anyhow::{Context, Result, bail};
use axum::http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::info;

use crate::orchestrator::RecommendationOrchestrator;

pub use routes::create_router;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub orchestrator: RecommendationOrchestrator,
}

impl AppState {
    pub fn new(orchestrator: RecommendationOrchestrator) -> Self {
        Self { orchestrator }
    }
}

/// CORS policy: the comma-separated origins in `allow_origin`, or any origin
/// when the setting is unset.
///
/// Fails on the first origin that is not a valid header value, and when the
/// setting is present but names no origin at all.
pub fn cors_layer(allow_origin: Option<&str>) -> Result<CorsLayer> {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    let Some(allow_origin) = allow_origin else {
        return Ok(layer.allow_origin(Any));
    };

    let origins = allow_origin
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|origin| {
            HeaderValue::from_str(origin)
                .with_context(|| format!("Invalid CORS origin '{}'", origin))
        })
        .collect::<Result<Vec<_>>>()?;
    if origins.is_empty() {
        bail!("CORS allow-origin setting is set but lists no origins");
    }

    info!("CORS restricted to {} origin(s)", origins.len());
    Ok(layer.allow_origin(AllowOrigin::list(origins)))
}
