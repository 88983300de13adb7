//! API route table.
//!
//! Routes are registered explicitly here; there is no discovery at runtime.

use crate::api::handlers::{
    create_link_handler, health_handler, history_handler, redirect_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All public routes.
///
/// # Endpoints
///
/// - `POST /`                    - Create a short link
/// - `GET  /health`              - Service and store health
/// - `GET  /his/{short_code}`    - Click history of a link
/// - `GET  /{short_code}`        - Redirect and record a click
///
/// `/health` is a static segment and takes priority over `/{short_code}`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_link_handler))
        .route("/health", get(health_handler))
        .route("/his/{short_code}", get(history_handler))
        .route("/{short_code}", get(redirect_handler))
}
