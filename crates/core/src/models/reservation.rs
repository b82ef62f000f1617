use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{BookingError, BookingResult};
use crate::models::settings::Settings;
use crate::pin;

/// Persisted reservation document, keyed by slot id. At most one exists per
/// slot at any time; the conditional write in the store guarantees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub date: NaiveDate,
    pub period: u8,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub grade: u8,
    pub class_no: u32,
    pub purpose: String,
    pub pin_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Booking request as submitted by a user, before hashing the PIN.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewReservation {
    pub grade: u8,
    pub class_no: u32,
    pub purpose: String,
    pub pin: String,
}

/// Booking payload as received over the wire; the slot is addressed by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReservationRequest {
    pub slot_id: String,
    pub grade: u8,
    pub class_no: u32,
    pub purpose: String,
    #[serde(default)]
    pub pin: String,
}

/// Reservation as presented to callers. The PIN hash never leaves the
/// storage layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationView {
    pub slot_id: String,
    pub date: NaiveDate,
    pub period: u8,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub grade: u8,
    pub class_no: u32,
    pub purpose: String,
}

impl ReservationView {
    pub fn from_record(slot_id: String, reservation: &Reservation) -> Self {
        Self {
            slot_id,
            date: reservation.date,
            period: reservation.period,
            start: reservation.start,
            end: reservation.end,
            grade: reservation.grade,
            class_no: reservation.class_no,
            purpose: reservation.purpose.clone(),
        }
    }
}

impl NewReservation {
    /// Rejects malformed input before any store access. Forced (admin)
    /// writes skip the PIN requirement only.
    pub fn validate(&self, settings: &Settings, force: bool) -> BookingResult<()> {
        if !(1..=6).contains(&self.grade) {
            return Err(BookingError::Validation(format!(
                "grade must be between 1 and 6, got {}",
                self.grade
            )));
        }
        let max_class = settings.classes_for(self.grade);
        if self.class_no < 1 || self.class_no > max_class {
            return Err(BookingError::Validation(format!(
                "class number must be between 1 and {} for grade {}, got {}",
                max_class, self.grade, self.class_no
            )));
        }
        if self.purpose.trim().is_empty() {
            return Err(BookingError::Validation(
                "purpose must not be empty".to_string(),
            ));
        }
        if !force {
            pin::validate_pin(&self.pin)?;
        }
        Ok(())
    }
}
