//! Handler for a link's click history.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::{ApiResponse, HistoryResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Returns how often a link was followed and when.
///
/// # Endpoint
///
/// `GET /his/{short_code}`
///
/// # Response
///
/// ```json
/// {
///   "success": true,
///   "message": "Link fetched successfully",
///   "data": {
///     "his_clicks_total": 2,
///     "clean_his_clicks": ["2025-01-01T10:00:00Z", "2025-01-01T10:05:00Z"]
///   }
/// }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn history_handler(
    State(state): State<AppState>,
    Path(short_code): Path<String>,
) -> Result<Json<ApiResponse<HistoryResponse>>, AppError> {
    let history = state.history_service.get_click_history(&short_code).await?;

    Ok(Json(ApiResponse::ok(
        "Link fetched successfully",
        HistoryResponse::from(history),
    )))
}
