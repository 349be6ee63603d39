//! Use case: per-night profit statistics for a booking batch.

use std::sync::Arc;

use crate::api::dto::booking::BookingRequestDto;
use crate::application::services::map_to_entities;
use crate::domain::entities::InvalidBookingRequest;
use crate::domain::services::ProfitCalculator;
use crate::domain::values::ProfitStats;

/// Maps validated DTOs into entities and delegates to the profit calculator.
pub struct CalculateStatsService {
    calculator: Arc<dyn ProfitCalculator>,
}

impl CalculateStatsService {
    pub fn new(calculator: Arc<dyn ProfitCalculator>) -> Self {
        Self { calculator }
    }

    /// Computes the statistics for a batch of booking requests.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidBookingRequest`] when any item carries an unparsable
    /// check-in date or field values the entity rejects.
    pub fn execute(
        &self,
        requests: &[BookingRequestDto],
    ) -> Result<ProfitStats, InvalidBookingRequest> {
        tracing::debug!(count = requests.len(), "Calculating stats for requests");

        let bookings = map_to_entities(requests)?;
        let stats = self.calculator.calculate_stats(&bookings);

        tracing::debug!(
            avg_night = stats.avg_night,
            min_night = stats.min_night,
            max_night = stats.max_night,
            "Stats calculation completed"
        );

        Ok(stats)
    }
}
