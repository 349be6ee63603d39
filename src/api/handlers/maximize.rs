//! Handler for the profit maximization endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use crate::api::dto::booking::BookingRequestDto;
use crate::api::dto::maximize::MaximizeResponse;
use crate::api::handlers::validate_batch;
use crate::error::AppError;
use crate::state::AppState;

/// Selects the profit-maximizing subset of non-overlapping bookings.
///
/// # Endpoint
///
/// `POST /maximize`
///
/// # Request Body
///
/// Same array-of-bookings shape as `POST /stats`.
///
/// # Response
///
/// ```json
/// {
///   "request_ids": ["bookata_XY123", "acme_AAAAA"],
///   "total_profit": 88.0,
///   "avg_night": 10.0,
///   "min_night": 8.0,
///   "max_night": 12.0
/// }
/// ```
///
/// `request_ids` are ordered by checkout date of the selected bookings. An
/// empty array yields an empty selection with all-zero metrics.
///
/// # Errors
///
/// Returns 400 Bad Request for malformed JSON or any invalid item.
pub async fn maximize_handler(
    State(state): State<AppState>,
    payload: Result<Json<Vec<BookingRequestDto>>, JsonRejection>,
) -> Result<Json<MaximizeResponse>, AppError> {
    let Json(bookings) = payload?;
    validate_batch(&state, &bookings)?;

    let result = state.maximize_service.execute(&bookings)?;

    tracing::info!(
        selected = result.request_ids.len(),
        total_profit = result.total_profit,
        "Optimization completed"
    );

    Ok(Json(result.into()))
}
