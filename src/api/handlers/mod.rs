//! HTTP request handlers for API endpoints.

pub mod health;
pub mod maximize;
pub mod stats;

pub use health::health_handler;
pub use maximize::maximize_handler;
pub use stats::stats_handler;

use serde_json::json;
use validator::Validate;

use crate::api::dto::booking::BookingRequestDto;
use crate::error::{AppError, validation_messages};
use crate::state::AppState;

/// Runs declarative validation over every item in the batch.
///
/// The first invalid item rejects the request, with its index in the error
/// message so clients can locate it.
pub(crate) fn validate_batch(
    state: &AppState,
    items: &[BookingRequestDto],
) -> Result<(), AppError> {
    if items.len() > state.max_batch_size {
        return Err(AppError::bad_request(
            format!(
                "Batch exceeds the maximum of {} bookings",
                state.max_batch_size
            ),
            json!({ "count": items.len(), "max": state.max_batch_size }),
        ));
    }

    for (index, item) in items.iter().enumerate() {
        item.validate().map_err(|errors| {
            AppError::bad_request(
                format!("Item {index}: {}", validation_messages(&errors)),
                json!({ "index": index }),
            )
        })?;
    }

    Ok(())
}
