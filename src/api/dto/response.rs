//! Success envelope shared by all JSON endpoints.

use serde::Serialize;

/// `{ "success": true, "message": ..., "data": ... }`
///
/// Errors use [`crate::error::ErrorBody`] with the same `success`/`message` shape.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub message: String,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
        }
    }
}
