//! Use case: profit-maximizing selection for a booking batch.

use std::sync::Arc;

use crate::api::dto::booking::BookingRequestDto;
use crate::application::services::map_to_entities;
use crate::domain::entities::InvalidBookingRequest;
use crate::domain::services::BookingOptimizer;
use crate::domain::values::BookingOptimizationResult;

/// Maps validated DTOs into entities and delegates to the optimizer.
pub struct MaximizeProfitsService {
    optimizer: Arc<dyn BookingOptimizer>,
}

impl MaximizeProfitsService {
    pub fn new(optimizer: Arc<dyn BookingOptimizer>) -> Self {
        Self { optimizer }
    }

    /// Finds the profit-maximizing non-overlapping selection.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidBookingRequest`] when any item carries an unparsable
    /// check-in date or field values the entity rejects.
    pub fn execute(
        &self,
        requests: &[BookingRequestDto],
    ) -> Result<BookingOptimizationResult, InvalidBookingRequest> {
        tracing::debug!(count = requests.len(), "Maximizing profits for requests");

        let bookings = map_to_entities(requests).inspect_err(|error| {
            tracing::warn!(%error, "Domain validation error during profit maximization");
        })?;

        let result = self.optimizer.find_optimal_combination(bookings);

        tracing::debug!(
            total_profit = result.total_profit,
            selected = result.request_ids.len(),
            "Profit maximization completed"
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::MockBookingOptimizer;

    fn dto(id: &str, check_in: &str) -> BookingRequestDto {
        BookingRequestDto {
            request_id: id.to_string(),
            check_in: check_in.to_string(),
            nights: 5,
            selling_rate: 200.0,
            margin: 20.0,
        }
    }

    #[test]
    fn test_delegates_to_optimizer() {
        let mut optimizer = MockBookingOptimizer::new();
        let expected =
            BookingOptimizationResult::new(vec!["a".to_string()], 40.0, 8.0, 8.0, 8.0);
        let returned = expected.clone();
        optimizer
            .expect_find_optimal_combination()
            .withf(|requests| requests.len() == 1 && requests[0].request_id() == "a")
            .times(1)
            .returning(move |_| returned.clone());

        let service = MaximizeProfitsService::new(Arc::new(optimizer));
        let result = service.execute(&[dto("a", "2020-01-01")]).unwrap();

        assert_eq!(result, expected);
    }

    #[test]
    fn test_unparsable_check_in_is_rejected_before_optimization() {
        let optimizer = MockBookingOptimizer::new();
        let service = MaximizeProfitsService::new(Arc::new(optimizer));

        let error = service.execute(&[dto("a", "soon")]).unwrap_err();

        assert_eq!(error, InvalidBookingRequest::InvalidCheckIn("soon".to_string()));
    }

    #[test]
    fn test_entity_validation_failures_propagate() {
        let optimizer = MockBookingOptimizer::new();
        let service = MaximizeProfitsService::new(Arc::new(optimizer));

        let mut item = dto("a", "2020-01-01");
        item.margin = 150.0;

        let error = service.execute(&[item]).unwrap_err();

        assert_eq!(error, InvalidBookingRequest::InvalidMargin(150.0));
    }
}
