//! Per-night profit statistics value object.

/// Aggregate per-night profit figures across a set of booking requests.
///
/// All three figures are rounded to two decimals by the producing service.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfitStats {
    pub avg_night: f64,
    pub min_night: f64,
    pub max_night: f64,
}

impl ProfitStats {
    pub fn new(avg_night: f64, min_night: f64, max_night: f64) -> Self {
        Self {
            avg_night,
            min_night,
            max_night,
        }
    }

    /// Canonical value for an empty request set.
    pub fn empty() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}
