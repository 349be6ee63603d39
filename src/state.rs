//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::{CalculateStatsService, MaximizeProfitsService};
use crate::domain::services::{PerNightProfitCalculator, WeightedIntervalScheduler};

/// Application services behind `Arc`s; cloning is cheap and every handler
/// gets its own handle.
#[derive(Clone)]
pub struct AppState {
    pub stats_service: Arc<CalculateStatsService>,
    pub maximize_service: Arc<MaximizeProfitsService>,
    /// Upper bound on bookings accepted in a single request.
    pub max_batch_size: usize,
}

impl AppState {
    /// Wires the default domain services into the use cases.
    pub fn new(max_batch_size: usize) -> Self {
        let calculator = Arc::new(PerNightProfitCalculator);
        let optimizer = Arc::new(WeightedIntervalScheduler);

        Self {
            stats_service: Arc::new(CalculateStatsService::new(calculator)),
            maximize_service: Arc::new(MaximizeProfitsService::new(optimizer)),
            max_batch_size,
        }
    }
}
