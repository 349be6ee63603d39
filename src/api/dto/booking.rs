//! Request DTO for booking batches.

use chrono::NaiveDate;
use serde::Deserialize;
use validator::{Validate, ValidationError};

/// Wire format of the check-in date.
pub const CHECK_IN_FORMAT: &str = "%Y-%m-%d";

/// One tentative booking as submitted by the client.
///
/// Field names are the wire names. Declarative constraints mirror the domain
/// rules so most bad input is rejected before entity construction; the
/// entity re-checks everything and remains the source of truth.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BookingRequestDto {
    #[validate(length(min = 1, message = "Request ID cannot be empty"))]
    pub request_id: String,

    /// Check-in date as `YYYY-MM-DD`.
    #[validate(custom(function = validate_check_in_date, message = "Check-in date must be a valid date"))]
    pub check_in: String,

    #[validate(range(min = 1, message = "Nights must be greater than 0"))]
    pub nights: i64,

    #[validate(range(exclusive_min = 0.0, message = "Selling rate must be greater than 0"))]
    pub selling_rate: f64,

    #[validate(range(
        exclusive_min = 0.0,
        max = 100.0,
        message = "Margin must be between 0 and 100"
    ))]
    pub margin: f64,
}

fn validate_check_in_date(value: &str) -> Result<(), ValidationError> {
    NaiveDate::parse_from_str(value, CHECK_IN_FORMAT)
        .map(|_| ())
        .map_err(|_| ValidationError::new("check_in"))
}
