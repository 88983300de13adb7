//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use url::Url;

use crate::api::extractors::ClientInfo;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::code_generator::validate_short_code;

/// Redirects a short code to its original URL and records the click.
///
/// # Endpoint
///
/// `GET /{short_code}`
///
/// # Request Flow
///
/// 1. Check the code format (length and alphabet)
/// 2. Resolve the code
/// 3. Record the click (inline, or through the click queue)
/// 4. Return 302 Found with `Location` set to the long URL
///
/// # Errors
///
/// Returns 400 Bad Request if the code is malformed.
/// Returns 404 Not Found if the short code doesn't exist.
/// Returns 500 Internal Server Error if an inline click append fails.
pub async fn redirect_handler(
    State(state): State<AppState>,
    Path(short_code): Path<String>,
    client: ClientInfo,
) -> Result<Response, AppError> {
    validate_short_code(&short_code, state.code_length)?;

    let long_url = state
        .redirect_service
        .resolve_and_record(&short_code, client.into_click())
        .await?;

    let location = location_header(&long_url)?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

/// Builds the `Location` value, percent-encoding non-ASCII URLs.
fn location_header(long_url: &str) -> Result<HeaderValue, AppError> {
    if long_url.is_ascii()
        && let Ok(value) = HeaderValue::from_str(long_url)
    {
        return Ok(value);
    }

    let encoded = Url::parse(long_url)
        .map_err(|e| AppError::internal(format!("Stored URL cannot be parsed: {e}")))?;

    HeaderValue::from_str(encoded.as_str())
        .map_err(|e| AppError::internal(format!("Stored URL is not a valid header: {e}")))
}
