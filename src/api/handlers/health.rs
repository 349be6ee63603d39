//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::booking::BookingRequestDto;
use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: optimizer self-check passed
/// - **503 Service Unavailable**: self-check failed
///
/// The service holds no connections or state, so the only meaningful check
/// is running the optimizer against a tiny known fixture and comparing the
/// result.
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let optimizer_check = check_optimizer(&state);

    let all_healthy = optimizer_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            optimizer: optimizer_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Runs the optimizer over a known two-booking fixture.
fn check_optimizer(state: &AppState) -> CheckStatus {
    let fixture = vec![
        BookingRequestDto {
            request_id: "health_a".to_string(),
            check_in: "2020-01-01".to_string(),
            nights: 5,
            selling_rate: 200.0,
            margin: 20.0,
        },
        BookingRequestDto {
            request_id: "health_b".to_string(),
            check_in: "2020-01-10".to_string(),
            nights: 4,
            selling_rate: 160.0,
            margin: 30.0,
        },
    ];

    match state.maximize_service.execute(&fixture) {
        Ok(result) if result.total_profit == 88.0 => CheckStatus {
            status: "ok".to_string(),
            message: Some("Self-check passed".to_string()),
        },
        Ok(result) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!(
                "Unexpected self-check profit: {}",
                result.total_profit
            )),
        },
        Err(error) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Self-check failed: {error}")),
        },
    }
}
