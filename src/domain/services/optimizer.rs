//! Weighted interval scheduling over booking requests.

use std::collections::HashSet;

use crate::domain::entities::BookingRequest;
use crate::domain::values::{BookingOptimizationResult, round_to_cents};

/// Resolves the profit-maximizing subset of non-overlapping bookings.
///
/// Total over valid entities: never fails, and an empty input yields the
/// canonical empty [`BookingOptimizationResult`]. There is no internal
/// state, so the same input always produces the same output.
#[cfg_attr(test, mockall::automock)]
pub trait BookingOptimizer: Send + Sync {
    fn find_optimal_combination(&self, requests: Vec<BookingRequest>) -> BookingOptimizationResult;
}

/// Classic weighted-interval-scheduling dynamic program, O(n log n).
///
/// Bookings are sorted by checkout date (stable, so equal checkouts keep
/// input order). For each booking the latest non-conflicting predecessor is
/// located by binary search over the sorted prefix, and the recurrence
/// decides between extending that predecessor's best selection or carrying
/// the previous best forward. Exact profit ties favor including the current
/// booking.
pub struct WeightedIntervalScheduler;

impl BookingOptimizer for WeightedIntervalScheduler {
    fn find_optimal_combination(
        &self,
        mut requests: Vec<BookingRequest>,
    ) -> BookingOptimizationResult {
        tracing::debug!(count = requests.len(), "Starting booking optimization");

        if requests.is_empty() {
            return BookingOptimizationResult::empty();
        }

        requests.sort_by(|a, b| a.check_out().cmp(&b.check_out()));

        let count = requests.len();
        let mut max_profit_at = vec![0.0_f64; count];
        let mut selected_ids_at: Vec<Vec<String>> = vec![Vec::new(); count];

        for i in 0..count {
            let mut profit = requests[i].total_profit();
            let mut ids = match latest_non_conflicting_index(&requests, i) {
                Some(latest) => {
                    profit += max_profit_at[latest];
                    selected_ids_at[latest].clone()
                }
                None => Vec::new(),
            };
            ids.push(requests[i].request_id().to_owned());

            // Exclude the current booking only when skipping it is STRICTLY
            // better; ties keep it in the selection.
            if i > 0 && max_profit_at[i - 1] > profit {
                max_profit_at[i] = max_profit_at[i - 1];
                selected_ids_at[i] = selected_ids_at[i - 1].clone();
            } else {
                max_profit_at[i] = profit;
                selected_ids_at[i] = ids;
            }
        }

        let optimal_ids: HashSet<&str> = selected_ids_at[count - 1]
            .iter()
            .map(String::as_str)
            .collect();
        let selected: Vec<&BookingRequest> = requests
            .iter()
            .filter(|request| optimal_ids.contains(request.request_id()))
            .collect();

        build_result(&selected)
    }
}

/// Binary search for the index of the latest booking (in checkout order)
/// whose checkout is at or before the current booking's check-in.
fn latest_non_conflicting_index(requests: &[BookingRequest], current: usize) -> Option<usize> {
    let check_in = requests[current].check_in();
    let mut low = 0_usize;
    let mut high = current;
    let mut result = None;

    while low < high {
        let mid = (low + high) / 2;
        if requests[mid].check_out() <= check_in {
            result = Some(mid);
            low = mid + 1;
        } else {
            high = mid;
        }
    }

    result
}

/// Assembles the result value object from the selected bookings, which are
/// already in checkout-ascending order.
fn build_result(selected: &[&BookingRequest]) -> BookingOptimizationResult {
    if selected.is_empty() {
        return BookingOptimizationResult::empty();
    }

    let request_ids: Vec<String> = selected
        .iter()
        .map(|request| request.request_id().to_owned())
        .collect();
    let total: f64 = selected.iter().map(|request| request.total_profit()).sum();
    let per_night: Vec<f64> = selected
        .iter()
        .map(|request| request.profit_per_night())
        .collect();

    let min = per_night.iter().copied().fold(f64::INFINITY, f64::min);
    let max = per_night.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    BookingOptimizationResult::new(
        request_ids,
        round_to_cents(total),
        round_to_cents(per_night.iter().sum::<f64>() / per_night.len() as f64),
        round_to_cents(min),
        round_to_cents(max),
    )
}
