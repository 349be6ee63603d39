//! Result value object for the booking optimization.

/// The profit-maximizing non-overlapping selection and its aggregate metrics.
///
/// `request_ids` are ordered by ascending checkout date of the selected
/// bookings, not by input order. All metrics are rounded to two decimals by
/// the optimizer.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingOptimizationResult {
    pub request_ids: Vec<String>,
    pub total_profit: f64,
    pub avg_night: f64,
    pub min_night: f64,
    pub max_night: f64,
}

impl BookingOptimizationResult {
    pub fn new(
        request_ids: Vec<String>,
        total_profit: f64,
        avg_night: f64,
        min_night: f64,
        max_night: f64,
    ) -> Self {
        Self {
            request_ids,
            total_profit,
            avg_night,
            min_night,
            max_night,
        }
    }

    /// Canonical value for an empty request set.
    pub fn empty() -> Self {
        Self::new(Vec::new(), 0.0, 0.0, 0.0, 0.0)
    }
}
