//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};
use chrono::Utc;

use crate::api::dto::HealthResponse;
use crate::state::AppState;

/// Returns service health and store reachability.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Store reachable
/// - **503 Service Unavailable**: Store unreachable
///
/// # Response
///
/// ```json
/// {
///   "status": "OK",
///   "timestamp": "2025-01-01T00:00:00Z",
///   "uptime": 3600,
///   "database": "connected",
///   "version": "0.1.0"
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let connected = state.link_repository.health_check().await;

    let response = HealthResponse {
        status: if connected { "OK" } else { "ERROR" }.to_string(),
        timestamp: Utc::now(),
        uptime: state.started_at.elapsed().as_secs(),
        database: if connected { "connected" } else { "disconnected" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    if connected {
        Ok(Json(response))
    } else {
        tracing::warn!("Health check failed: store unreachable");
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}
