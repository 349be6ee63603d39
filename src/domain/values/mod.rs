//! Immutable value objects carried out of the domain services.

pub mod optimization_result;
pub mod profit_stats;

pub use optimization_result::BookingOptimizationResult;
pub use profit_stats::ProfitStats;

/// Rounds a monetary figure to two decimals, half away from zero.
///
/// Both domain services round through this single helper so that statistics
/// and optimization output agree on `*.xx5` boundaries.
pub(crate) fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
