//! Domain services: the statistics aggregator and the optimizer.
//!
//! Each service is a single pure algorithm behind a narrow trait, so the
//! application layer can be tested against mocks without touching the real
//! implementations.

pub mod optimizer;
pub mod profit_calculator;

pub use optimizer::{BookingOptimizer, WeightedIntervalScheduler};
pub use profit_calculator::{PerNightProfitCalculator, ProfitCalculator};

#[cfg(test)]
pub use optimizer::MockBookingOptimizer;
#[cfg(test)]
pub use profit_calculator::MockProfitCalculator;
