//! Booking request entity and its validation rules.

use chrono::{Days, NaiveDate};

/// Errors raised when assembling a booking request from raw fields.
///
/// Every variant is recoverable: the caller rejects the offending item (or
/// the whole batch) and reports it to the client.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidBookingRequest {
    #[error("Request ID cannot be empty")]
    EmptyRequestId,

    #[error("Nights must be greater than 0, got: {0}")]
    InvalidNights(i64),

    #[error("Selling rate must be greater than 0, got: {0:.2}")]
    InvalidSellingRate(f64),

    #[error("Margin must be between 0 and 100, got: {0:.2}")]
    InvalidMargin(f64),

    #[error("Invalid check-in date format: {0}")]
    InvalidCheckIn(String),
}

/// A tentative reservation request for the single bookable unit.
///
/// An instance that exists is always valid: every field is checked by
/// [`BookingRequest::new`] and nothing is mutable afterwards. The occupied
/// date range is half-open (check-in inclusive, check-out exclusive), so a
/// booking ending on the day another starts does not conflict with it.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingRequest {
    request_id: String,
    check_in: NaiveDate,
    check_out: NaiveDate,
    nights: u32,
    selling_rate: f64,
    margin: f64,
}

impl BookingRequest {
    /// Creates a validated booking request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidBookingRequest`] when the request id is empty or
    /// whitespace-only, `nights` is not positive, `selling_rate` is not
    /// positive, `margin` falls outside `(0, 100]`, or the checkout date is
    /// not representable.
    pub fn new(
        request_id: impl Into<String>,
        check_in: NaiveDate,
        nights: i64,
        selling_rate: f64,
        margin: f64,
    ) -> Result<Self, InvalidBookingRequest> {
        let request_id = request_id.into();

        if request_id.trim().is_empty() {
            return Err(InvalidBookingRequest::EmptyRequestId);
        }
        if nights <= 0 {
            return Err(InvalidBookingRequest::InvalidNights(nights));
        }
        if selling_rate <= 0.0 {
            return Err(InvalidBookingRequest::InvalidSellingRate(selling_rate));
        }
        if margin <= 0.0 || margin > 100.0 {
            return Err(InvalidBookingRequest::InvalidMargin(margin));
        }

        let nights = u32::try_from(nights).map_err(|_| InvalidBookingRequest::InvalidNights(nights))?;
        let check_out = check_in
            .checked_add_days(Days::new(u64::from(nights)))
            .ok_or(InvalidBookingRequest::InvalidNights(i64::from(nights)))?;

        Ok(Self {
            request_id,
            check_in,
            check_out,
            nights,
            selling_rate,
            margin,
        })
    }

    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    pub fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    /// Checkout date: check-in plus the number of nights, day granularity.
    pub fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    pub fn nights(&self) -> u32 {
        self.nights
    }

    pub fn selling_rate(&self) -> f64 {
        self.selling_rate
    }

    pub fn margin(&self) -> f64 {
        self.margin
    }

    /// Total profit for the stay: `selling_rate * margin / 100`.
    pub fn total_profit(&self) -> f64 {
        self.selling_rate * self.margin / 100.0
    }

    /// Total profit normalized by the number of nights.
    pub fn profit_per_night(&self) -> f64 {
        self.total_profit() / f64::from(self.nights)
    }

    /// Whether two bookings compete for at least one night.
    ///
    /// Half-open interval test: a checkout equal to the other booking's
    /// check-in is NOT an overlap, so back-to-back stays are compatible.
    pub fn overlaps_with(&self, other: &Self) -> bool {
        self.check_in < other.check_out() && other.check_in() < self.check_out()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn booking(id: &str, check_in: NaiveDate, nights: i64) -> BookingRequest {
        BookingRequest::new(id, check_in, nights, 100.0, 10.0).unwrap()
    }

    #[test]
    fn test_valid_booking_request() {
        let request = BookingRequest::new("bookata_XY123", date(2020, 1, 1), 5, 200.0, 20.0).unwrap();

        assert_eq!(request.request_id(), "bookata_XY123");
        assert_eq!(request.check_in(), date(2020, 1, 1));
        assert_eq!(request.nights(), 5);
        assert_eq!(request.selling_rate(), 200.0);
        assert_eq!(request.margin(), 20.0);
    }

    #[test]
    fn test_rejects_empty_request_id() {
        let result = BookingRequest::new("", date(2020, 1, 1), 5, 200.0, 20.0);
        assert_eq!(result.unwrap_err(), InvalidBookingRequest::EmptyRequestId);
    }

    #[test]
    fn test_rejects_whitespace_request_id() {
        let result = BookingRequest::new("   ", date(2020, 1, 1), 5, 200.0, 20.0);
        assert_eq!(result.unwrap_err(), InvalidBookingRequest::EmptyRequestId);
    }

    #[test]
    fn test_rejects_non_positive_nights() {
        let result = BookingRequest::new("req", date(2020, 1, 1), 0, 200.0, 20.0);
        assert_eq!(result.unwrap_err(), InvalidBookingRequest::InvalidNights(0));

        let result = BookingRequest::new("req", date(2020, 1, 1), -3, 200.0, 20.0);
        assert_eq!(result.unwrap_err(), InvalidBookingRequest::InvalidNights(-3));
    }

    #[test]
    fn test_rejects_non_positive_selling_rate() {
        let result = BookingRequest::new("req", date(2020, 1, 1), 5, 0.0, 20.0);
        assert_eq!(result.unwrap_err(), InvalidBookingRequest::InvalidSellingRate(0.0));
    }

    #[test]
    fn test_rejects_margin_out_of_range() {
        let result = BookingRequest::new("req", date(2020, 1, 1), 5, 200.0, 0.0);
        assert_eq!(result.unwrap_err(), InvalidBookingRequest::InvalidMargin(0.0));

        let result = BookingRequest::new("req", date(2020, 1, 1), 5, 200.0, 100.5);
        assert_eq!(result.unwrap_err(), InvalidBookingRequest::InvalidMargin(100.5));
    }

    #[test]
    fn test_accepts_margin_of_exactly_100() {
        let request = BookingRequest::new("req", date(2020, 1, 1), 5, 200.0, 100.0).unwrap();
        assert_eq!(request.total_profit(), 200.0);
    }

    #[test]
    fn test_derived_profit_figures() {
        let request = BookingRequest::new("req", date(2020, 1, 1), 5, 200.0, 20.0).unwrap();

        assert_eq!(request.total_profit(), 40.0);
        assert_eq!(request.profit_per_night(), 8.0);
    }

    #[test]
    fn test_check_out_adds_nights_to_check_in() {
        let request = booking("req", date(2020, 1, 1), 5);
        assert_eq!(request.check_out(), date(2020, 1, 6));

        // Month boundary
        let request = booking("req", date(2020, 1, 30), 3);
        assert_eq!(request.check_out(), date(2020, 2, 2));
    }

    #[test]
    fn test_overlapping_bookings() {
        let a = booking("a", date(2020, 1, 1), 5); // out 2020-01-06
        let b = booking("b", date(2020, 1, 4), 4); // in before a's checkout

        assert!(a.overlaps_with(&b));
        assert!(b.overlaps_with(&a));
    }

    #[test]
    fn test_disjoint_bookings_do_not_overlap() {
        let a = booking("a", date(2020, 1, 1), 5);
        let b = booking("b", date(2020, 1, 10), 4);

        assert!(!a.overlaps_with(&b));
        assert!(!b.overlaps_with(&a));
    }

    #[test]
    fn test_back_to_back_bookings_do_not_overlap() {
        let a = booking("a", date(2020, 1, 1), 5); // out 2020-01-06
        let b = booking("b", date(2020, 1, 6), 3); // in on a's checkout day

        assert!(!a.overlaps_with(&b));
        assert!(!b.overlaps_with(&a));
    }

    #[test]
    fn test_containment_is_an_overlap() {
        let a = booking("a", date(2020, 1, 1), 10);
        let b = booking("b", date(2020, 1, 3), 2);

        assert!(a.overlaps_with(&b));
        assert!(b.overlaps_with(&a));
    }
}
