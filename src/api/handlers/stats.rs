//! Handler for the profit statistics endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use crate::api::dto::booking::BookingRequestDto;
use crate::api::dto::stats::StatsResponse;
use crate::api::handlers::validate_batch;
use crate::error::AppError;
use crate::state::AppState;

/// Computes per-night profit statistics across all submitted bookings.
///
/// # Endpoint
///
/// `POST /stats`
///
/// # Request Body
///
/// ```json
/// [
///   {
///     "request_id": "bookata_XY123",
///     "check_in": "2020-01-01",
///     "nights": 5,
///     "selling_rate": 200,
///     "margin": 20
///   }
/// ]
/// ```
///
/// # Response
///
/// ```json
/// { "avg_night": 8.0, "min_night": 8.0, "max_night": 8.0 }
/// ```
///
/// An empty array yields all-zero statistics.
///
/// # Errors
///
/// Returns 400 Bad Request for malformed JSON or any invalid item.
pub async fn stats_handler(
    State(state): State<AppState>,
    payload: Result<Json<Vec<BookingRequestDto>>, JsonRejection>,
) -> Result<Json<StatsResponse>, AppError> {
    let Json(bookings) = payload?;
    validate_batch(&state, &bookings)?;

    let stats = state.stats_service.execute(&bookings)?;

    Ok(Json(stats.into()))
}
