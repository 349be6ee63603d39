//! API route configuration.

use crate::api::handlers::{maximize_handler, stats_handler};
use crate::state::AppState;
use axum::{Router, routing::post};

/// The two booking operations.
///
/// # Endpoints
///
/// - `POST /stats`    - Per-night profit statistics for a booking batch
/// - `POST /maximize` - Profit-maximizing non-overlapping selection
pub fn booking_routes() -> Router<AppState> {
    Router::new()
        .route("/stats", post(stats_handler))
        .route("/maximize", post(maximize_handler))
}
