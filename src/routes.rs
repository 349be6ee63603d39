//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /stats`     - Per-night profit statistics
//! - `POST /maximize`  - Profit-maximizing booking selection
//! - `GET  /health`    - Optimizer self-check
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on the booking endpoints
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `behind_proxy` - when `true`, rate limiting reads client IP from
///   `X-Forwarded-For` / `X-Real-IP` headers instead of the peer socket
///   address; enable only behind a trusted reverse proxy
pub fn app_router(state: AppState, behind_proxy: bool) -> NormalizePath<Router> {
    let booking = api::routes::booking_routes();
    let booking = if behind_proxy {
        booking.layer(rate_limit::proxy_layer())
    } else {
        booking.layer(rate_limit::layer())
    };

    let router = Router::new()
        .merge(booking)
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
