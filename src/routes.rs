//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`   - Health check (line store)
//! - `/lines*`        - Line management, see [`crate::api::routes`]
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling (`/lines/` ≡ `/lines`)

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}

/// Routes and tracing without path normalization.
///
/// Normalization has to wrap the router from the outside, so this is the
/// piece that can be served directly by in-process test servers.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .merge(api::routes::line_routes())
        .with_state(state)
        .layer(tracing::layer())
}
