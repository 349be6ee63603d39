//! Core domain entities representing the business data model.
//!
//! The only entity of this service is [`BookingRequest`]: a validated,
//! immutable reservation request. Validation happens once, at construction,
//! so downstream services never re-check their input.

pub mod booking_request;

pub use booking_request::{BookingRequest, InvalidBookingRequest};
