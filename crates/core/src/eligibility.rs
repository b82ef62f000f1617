use chrono::{DateTime, Datelike, NaiveDate, Weekday};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Summer vacation: every slot in this inclusive range is closed.
pub fn blackout_range() -> (NaiveDate, NaiveDate) {
    (
        NaiveDate::from_ymd_opt(2025, 9, 1).expect("valid blackout start"),
        NaiveDate::from_ymd_opt(2025, 9, 10).expect("valid blackout end"),
    )
}

/// Static schedule restrictions that apply to a slot regardless of who is
/// asking. These are re-checked inside the reservation write, so an admin
/// force cannot slip past them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotRestriction {
    /// Date falls inside the summer vacation blackout.
    Vacation,
    /// Wednesday period 6 is never bookable by schedule policy.
    WednesdayLastPeriod,
}

impl SlotRestriction {
    pub fn message(&self) -> &'static str {
        match self {
            SlotRestriction::Vacation => "closed for summer vacation",
            SlotRestriction::WednesdayLastPeriod => {
                "Wednesday period 6 is not bookable"
            }
        }
    }
}

pub fn slot_restriction(day: NaiveDate, period: u8) -> Option<SlotRestriction> {
    let (start, end) = blackout_range();
    if day >= start && day <= end {
        return Some(SlotRestriction::Vacation);
    }
    if day.weekday() == Weekday::Wed && period == 6 {
        return Some(SlotRestriction::WednesdayLastPeriod);
    }
    None
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingReason {
    AdminOverride,
    PriorityGrade,
    GeneralWindow,
    NotYetOpen,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingDecision {
    pub allowed: bool,
    pub reason: BookingReason,
    pub message: String,
}

/// Week-level eligibility for an acting user. Pure: reservation and block
/// state are layered on top by the caller.
pub fn can_book(
    acting_grade: u8,
    is_admin: bool,
    assigned_grade: Option<u8>,
    open_time: DateTime<Tz>,
    now: DateTime<Tz>,
) -> BookingDecision {
    if is_admin {
        return BookingDecision {
            allowed: true,
            reason: BookingReason::AdminOverride,
            message: "admin booking override".to_string(),
        };
    }
    if let Some(assigned) = assigned_grade {
        if assigned == acting_grade {
            return BookingDecision {
                allowed: true,
                reason: BookingReason::PriorityGrade,
                message: format!("priority booking week for grade {}", assigned),
            };
        }
    }
    if now >= open_time {
        return BookingDecision {
            allowed: true,
            reason: BookingReason::GeneralWindow,
            message: "general booking window is open".to_string(),
        };
    }
    BookingDecision {
        allowed: false,
        reason: BookingReason::NotYetOpen,
        message: format!(
            "bookable after {}",
            open_time.format("%Y-%m-%d %H:%M %Z")
        ),
    }
}
