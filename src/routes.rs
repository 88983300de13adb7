//! Top-level router configuration.
//!
//! # Route Structure
//!
//! See [`crate::api::routes::routes`] for the endpoint table.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Cross-origin access for browser clients
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = api::routes::routes()
        .with_state(state)
        .layer(cors::layer())
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
