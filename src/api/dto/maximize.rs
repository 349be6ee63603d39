//! Response DTO for the optimization endpoint.

use serde::Serialize;

use crate::domain::values::BookingOptimizationResult;

/// The selected booking ids and their aggregate metrics.
#[derive(Debug, Serialize)]
pub struct MaximizeResponse {
    pub request_ids: Vec<String>,
    pub total_profit: f64,
    pub avg_night: f64,
    pub min_night: f64,
    pub max_night: f64,
}

impl From<BookingOptimizationResult> for MaximizeResponse {
    fn from(result: BookingOptimizationResult) -> Self {
        Self {
            request_ids: result.request_ids,
            total_profit: result.total_profit,
            avg_night: result.avg_night,
            min_night: result.min_night,
            max_night: result.max_night,
        }
    }
}
