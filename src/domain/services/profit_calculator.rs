//! Per-night profit statistics over a set of booking requests.

use crate::domain::entities::BookingRequest;
use crate::domain::values::{ProfitStats, round_to_cents};

/// Computes aggregate per-night profit statistics.
///
/// Total over valid entities: never fails, and an empty input yields the
/// canonical zero-valued [`ProfitStats`].
#[cfg_attr(test, mockall::automock)]
pub trait ProfitCalculator: Send + Sync {
    fn calculate_stats(&self, requests: &[BookingRequest]) -> ProfitStats;
}

/// Default calculator: average, minimum, and maximum of profit-per-night,
/// each independently rounded to two decimals.
pub struct PerNightProfitCalculator;

impl ProfitCalculator for PerNightProfitCalculator {
    fn calculate_stats(&self, requests: &[BookingRequest]) -> ProfitStats {
        if requests.is_empty() {
            return ProfitStats::empty();
        }

        let profits_per_night: Vec<f64> = requests
            .iter()
            .map(BookingRequest::profit_per_night)
            .collect();

        let sum: f64 = profits_per_night.iter().sum();
        let min = profits_per_night.iter().copied().fold(f64::INFINITY, f64::min);
        let max = profits_per_night.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        ProfitStats::new(
            round_to_cents(sum / profits_per_night.len() as f64),
            round_to_cents(min),
            round_to_cents(max),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn booking(id: &str, day: u32, nights: i64, rate: f64, margin: f64) -> BookingRequest {
        let check_in = NaiveDate::from_ymd_opt(2020, 1, day).unwrap();
        BookingRequest::new(id, check_in, nights, rate, margin).unwrap()
    }

    #[test]
    fn test_empty_input_yields_zero_stats() {
        let calculator = PerNightProfitCalculator;
        assert_eq!(calculator.calculate_stats(&[]), ProfitStats::empty());
    }

    #[test]
    fn test_single_request_stats() {
        let calculator = PerNightProfitCalculator;
        let requests = vec![booking("single", 1, 5, 200.0, 20.0)];

        let stats = calculator.calculate_stats(&requests);

        assert_eq!(stats.avg_night, 8.0);
        assert_eq!(stats.min_night, 8.0);
        assert_eq!(stats.max_night, 8.0);
    }

    #[test]
    fn test_multiple_request_stats() {
        let calculator = PerNightProfitCalculator;
        // Per-night profits: 10.0, 12.1, 10.29
        let requests = vec![
            booking("bookata_XY123", 1, 1, 50.0, 20.0),
            booking("kayete_PP234", 4, 1, 55.0, 22.0),
            booking("trivoltio_ZX69", 7, 1, 49.0, 21.0),
        ];

        let stats = calculator.calculate_stats(&requests);

        assert_eq!(stats.avg_night, 10.8);
        assert_eq!(stats.min_night, 10.0);
        assert_eq!(stats.max_night, 12.1);
    }

    #[test]
    fn test_stats_are_order_independent() {
        let calculator = PerNightProfitCalculator;
        let forward = vec![
            booking("a", 1, 1, 50.0, 20.0),
            booking("b", 4, 1, 55.0, 22.0),
            booking("c", 7, 1, 49.0, 21.0),
        ];
        let mut reversed = forward.clone();
        reversed.reverse();

        assert_eq!(
            calculator.calculate_stats(&forward),
            calculator.calculate_stats(&reversed)
        );
    }

    #[test]
    fn test_overlapping_requests_are_not_excluded() {
        let calculator = PerNightProfitCalculator;
        // Statistics ignore the calendar entirely; both overlapping
        // requests contribute.
        let requests = vec![
            booking("a", 1, 2, 100.0, 10.0), // 5.0 per night
            booking("b", 2, 2, 200.0, 10.0), // 10.0 per night
        ];

        let stats = calculator.calculate_stats(&requests);

        assert_eq!(stats.avg_night, 7.5);
        assert_eq!(stats.min_night, 5.0);
        assert_eq!(stats.max_night, 10.0);
    }
}
