//! DTO for the health check endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `"OK"` or `"ERROR"`.
    pub status: String,
    pub timestamp: DateTime<Utc>,
    /// Seconds since the server started.
    pub uptime: u64,
    /// `"connected"` or `"disconnected"`.
    pub database: String,
    pub version: String,
}
