//! Response DTO for the statistics endpoint.

use serde::Serialize;

use crate::domain::values::ProfitStats;

/// Per-night profit statistics as returned to the client.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub avg_night: f64,
    pub min_night: f64,
    pub max_night: f64,
}

impl From<ProfitStats> for StatsResponse {
    fn from(stats: ProfitStats) -> Self {
        Self {
            avg_night: stats.avg_night,
            min_night: stats.min_night,
            max_night: stats.max_night,
        }
    }
}
