//! HSN validation service library surface.
//!
//! The router is exposed here so integration tests can drive it directly
//! with `tower::ServiceExt::oneshot` instead of binding a socket.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod state;
pub mod terminal;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use state::AppState;

/// Builds the HTTP application over a loaded master table.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::home))
        .route("/health", get(handlers::health))
        .route("/validate/:code", get(handlers::validate_single))
        .route("/validate", post(handlers::validate_multiple))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
