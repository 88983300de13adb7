//! Application error type and its HTTP representation.
//!
//! Every failure in the service is scoped to a single request. Errors are
//! rendered with the same envelope as successful responses:
//!
//! ```json
//! { "success": false, "message": "Invalid input data", "errors": ["Invalid URL format"] }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::utils::db_error::{is_foreign_key_violation, is_query_canceled};

/// Error envelope returned for every non-2xx response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
    pub errors: Option<Vec<String>>,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed or unsafe input, rejected at the request boundary.
    #[error("{message}")]
    Validation {
        message: String,
        errors: Vec<String>,
    },

    #[error("{message}")]
    NotFound { message: String },

    /// The store rejected a short code that already exists.
    #[error("Short code already exists: {code}")]
    DuplicateCode { code: String },

    /// No free short code was found within the configured number of attempts.
    #[error("Failed to allocate a unique short code after {attempts} attempts")]
    CodeSpaceExhausted { attempts: u32 },

    /// Connection, pool or timeout failure talking to the store.
    #[error("Store unavailable: {message}")]
    StoreUnavailable { message: String },

    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, errors: Vec<String>) -> Self {
        Self::Validation {
            message: message.into(),
            errors,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn store_unavailable(message: impl Into<String>) -> Self {
        Self::StoreUnavailable {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// HTTP status code this error is rendered with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::DuplicateCode { .. } => StatusCode::CONFLICT,
            AppError::CodeSpaceExhausted { .. }
            | AppError::StoreUnavailable { .. }
            | AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Builds the response envelope. Server-side details are not exposed.
    pub fn to_body(&self) -> ErrorBody {
        let (message, errors) = match self {
            AppError::Validation { message, errors } => (message.clone(), Some(errors.clone())),
            AppError::NotFound { message } => (message.clone(), None),
            AppError::DuplicateCode { .. } => ("Short code already exists".to_string(), None),
            AppError::CodeSpaceExhausted { .. }
            | AppError::StoreUnavailable { .. }
            | AppError::Internal { .. } => ("Server error".to_string(), None),
        };

        ErrorBody {
            success: false,
            message,
            errors,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        (status, Json(self.to_body())).into_response()
    }
}

/// Classifies database errors.
///
/// Unique violations are not handled here: only the repository knows which
/// short code was rejected, see [`crate::infrastructure::persistence::PgLinkRepository`].
impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if is_foreign_key_violation(&e) {
            return AppError::not_found("Link not found");
        }

        if is_query_canceled(&e) {
            return AppError::store_unavailable("statement timed out");
        }

        match e {
            sqlx::Error::RowNotFound => AppError::not_found("Link not found"),
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Protocol(_)
            | sqlx::Error::WorkerCrashed => AppError::store_unavailable(e.to_string()),
            other => AppError::internal(format!("Database error: {other}")),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .map(|err| {
                err.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string())
            })
            .collect();
        messages.sort();

        AppError::bad_request("Invalid input data", messages)
    }
}
