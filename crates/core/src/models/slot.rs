use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::calendar;
use crate::errors::{BookingError, BookingResult};

/// Number of periods in a school day. The schedule always shows all six.
pub const MAX_PERIODS: u8 = 6;

/// One bookable (date, period) cell. Dates are restricted to weekdays and
/// periods to 1..=6; `start`/`end` are derived from the period timetable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub day: NaiveDate,
    pub period: u8,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl Slot {
    pub fn new(day: NaiveDate, period: u8) -> BookingResult<Self> {
        if day.weekday().num_days_from_monday() >= 5 {
            return Err(BookingError::Validation(format!(
                "{} is not a weekday",
                day
            )));
        }
        if !(1..=MAX_PERIODS).contains(&period) {
            return Err(BookingError::Validation(format!(
                "period must be between 1 and {}, got {}",
                MAX_PERIODS, period
            )));
        }
        let table = calendar::build_period_table(MAX_PERIODS);
        let (start, end) = table[&period];
        Ok(Self {
            day,
            period,
            start,
            end,
        })
    }

    /// Storage key, e.g. `2025-09-15_P3`. This format keys both the
    /// reservations and blocks collections and must not change.
    pub fn id(&self) -> String {
        format!("{}_P{}", self.day, self.period)
    }

    /// Inverse of [`Slot::id`].
    pub fn parse_id(id: &str) -> BookingResult<Self> {
        let (date_part, period_part) = id
            .split_once("_P")
            .ok_or_else(|| BookingError::Validation(format!("malformed slot id: {}", id)))?;
        let day = date_part
            .parse::<NaiveDate>()
            .map_err(|_| BookingError::Validation(format!("malformed slot id: {}", id)))?;
        let period = period_part
            .parse::<u8>()
            .map_err(|_| BookingError::Validation(format!("malformed slot id: {}", id)))?;
        Self::new(day, period)
    }
}
