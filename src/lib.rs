//! # Booking Optimizer
//!
//! A booking yield optimization service built with Axum.
//!
//! Given a batch of tentative reservation requests for a single bookable
//! unit, the service answers two questions: summary statistics on per-night
//! profit across the batch, and the subset of non-overlapping requests that
//! maximizes total profit (weighted interval scheduling).
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer
//! separation:
//!
//! - **Domain Layer** ([`domain`]) - The booking entity, the optimization
//!   and statistics services, and their value objects
//! - **Application Layer** ([`application`]) - Use cases mapping validated
//!   input onto the domain
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! All dependencies point toward the entity; the domain performs no I/O and
//! holds no state, so every request is independent.
//!
//! ## Quick Start
//!
//! ```bash
//! # All configuration is optional
//! export LISTEN="0.0.0.0:3000"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{CalculateStatsService, MaximizeProfitsService};
    pub use crate::domain::entities::{BookingRequest, InvalidBookingRequest};
    pub use crate::domain::services::{
        BookingOptimizer, PerNightProfitCalculator, ProfitCalculator, WeightedIntervalScheduler,
    };
    pub use crate::domain::values::{BookingOptimizationResult, ProfitStats};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
