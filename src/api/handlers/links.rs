//! Handler for link creation.

use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};
use validator::Validate;

use crate::api::dto::{ApiResponse, CreateLinkRequest, LinkResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for one long URL.
///
/// # Endpoint
///
/// `POST /`
///
/// # Request Body
///
/// ```json
/// { "long_url": "https://example.com/some/long/path" }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "success": true,
///   "message": "Link created successfully",
///   "data": {
///     "id": 1,
///     "long_url": "https://example.com/some/long/path",
///     "short_code": "aB3x",
///     "his_clicks": [],
///     "created_at": "2025-01-01T00:00:00Z",
///     "updated_at": "2025-01-01T00:00:00Z"
///   }
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for a malformed body or a rejected URL.
/// Returns 500 Internal Server Error if the store fails.
pub async fn create_link_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateLinkRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<LinkResponse>>), AppError> {
    let Json(payload) = payload
        .map_err(|rejection| AppError::bad_request("Invalid input data", vec![rejection.body_text()]))?;

    payload.validate()?;

    let long_url = payload.long_url.ok_or_else(|| {
        AppError::bad_request("Invalid input data", vec!["Please provide long_url".to_string()])
    })?;

    let link = state.link_service.create_short_link(long_url).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(
            "Link created successfully",
            LinkResponse::from(link),
        )),
    ))
}
