//! Application services (use cases) orchestrating the domain.
//!
//! Each service owns the DTO-to-entity mapping for its operation and
//! delegates the actual computation to a domain service trait object.

pub mod maximize_service;
pub mod stats_service;

pub use maximize_service::MaximizeProfitsService;
pub use stats_service::CalculateStatsService;

use chrono::NaiveDate;

use crate::api::dto::booking::{BookingRequestDto, CHECK_IN_FORMAT};
use crate::domain::entities::{BookingRequest, InvalidBookingRequest};

/// Maps a validated DTO batch into domain entities.
///
/// The first invalid item aborts the whole batch.
pub(crate) fn map_to_entities(
    requests: &[BookingRequestDto],
) -> Result<Vec<BookingRequest>, InvalidBookingRequest> {
    requests.iter().map(map_to_entity).collect()
}

fn map_to_entity(dto: &BookingRequestDto) -> Result<BookingRequest, InvalidBookingRequest> {
    let check_in = NaiveDate::parse_from_str(&dto.check_in, CHECK_IN_FORMAT)
        .map_err(|_| InvalidBookingRequest::InvalidCheckIn(dto.check_in.clone()))?;

    BookingRequest::new(
        dto.request_id.clone(),
        check_in,
        dto.nights,
        dto.selling_rate,
        dto.margin,
    )
}
