#![allow(dead_code)]

use axum::{
    Router,
    routing::{get, post},
};
use booking_optimizer::api::handlers::{health_handler, maximize_handler, stats_handler};
use booking_optimizer::state::AppState;
use serde_json::{Value, json};

pub fn create_test_state() -> AppState {
    AppState::new(10_000)
}

/// The full route set with default state, no rate limiting.
pub fn booking_app() -> Router {
    booking_app_with_state(create_test_state())
}

pub fn booking_app_with_state(state: AppState) -> Router {
    Router::new()
        .route("/stats", post(stats_handler))
        .route("/maximize", post(maximize_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

pub fn booking(id: &str, check_in: &str, nights: i64, selling_rate: f64, margin: f64) -> Value {
    json!({
        "request_id": id,
        "check_in": check_in,
        "nights": nights,
        "selling_rate": selling_rate,
        "margin": margin,
    })
}
