use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::AppState;
use super::handlers;

/// Creates the API router with all routes
pub fn create_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/api/options/:category", get(handlers::get_options))
        .route("/api/recommend", post(handlers::recommend))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
