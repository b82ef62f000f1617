pub mod block;
pub mod config;
pub mod reservation;

use chrono::NaiveDate;

use roombook_core::errors::{BookingError, BookingResult};

use crate::MAX_LIST_RANGE_DAYS;

/// Guard shared by the range listings. Both repositories walk the span day
/// by day, so the span must be ordered and bounded before any store read.
pub(crate) fn validate_range(from: NaiveDate, to: NaiveDate) -> BookingResult<()> {
    if from > to {
        return Err(BookingError::Validation(format!(
            "invalid range: {} is after {}",
            from, to
        )));
    }
    if (to - from).num_days() > MAX_LIST_RANGE_DAYS {
        return Err(BookingError::Validation(format!(
            "range may cover at most {} days",
            MAX_LIST_RANGE_DAYS
        )));
    }
    Ok(())
}
