use std::sync::Arc;

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};

use roombook_core::eligibility;
use roombook_core::errors::{BookingError, BookingResult};
use roombook_core::models::block::Block;
use roombook_core::models::reservation::{NewReservation, Reservation};
use roombook_core::models::settings::Settings;
use roombook_core::models::slot::{Slot, MAX_PERIODS};
use roombook_core::pin;

use crate::repositories::validate_range;
use crate::{DocumentStore, BLOCKS, RESERVATIONS};

/// Transactional create/delete of reservation documents. The occupancy
/// guarantee (at most one reservation per slot) comes from the store's
/// conditional put; everything else here is validation layered in front
/// of it.
pub struct ReservationRepository {
    store: Arc<dyn DocumentStore>,
}

impl ReservationRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn get(&self, slot_id: &str) -> BookingResult<Option<Reservation>> {
        let doc = self
            .store
            .get(RESERVATIONS, slot_id)
            .await
            .map_err(BookingError::Storage)?;
        match doc {
            Some(doc) => {
                let reservation = serde_json::from_value(doc)
                    .map_err(|e| BookingError::Storage(eyre::eyre!(e)))?;
                Ok(Some(reservation))
            }
            None => Ok(None),
        }
    }

    /// Creates a reservation for `slot`, or fails as a value.
    ///
    /// Hard policy blocks (vacation blackout, Wednesday period 6, a live
    /// administrative block) are enforced for every actor; `force` bypasses
    /// only the occupancy check. When two non-forced callers race on the
    /// same slot, exactly one write lands and the loser gets
    /// [`BookingError::Conflict`] with no partial state.
    pub async fn put(
        &self,
        slot: &Slot,
        request: &NewReservation,
        settings: &Settings,
        force: bool,
        now: DateTime<Utc>,
    ) -> BookingResult<Reservation> {
        if let Some(restriction) = eligibility::slot_restriction(slot.day, slot.period) {
            return Err(BookingError::PolicyBlocked(
                restriction.message().to_string(),
            ));
        }

        request.validate(settings, force)?;

        // Cross-collection check; blocks are admin-managed, so this read
        // is not a contention path like the occupancy check below.
        if let Some(block) = self.block_for(&slot.id()).await? {
            return Err(BookingError::PolicyBlocked(format!(
                "slot is administratively blocked: {}",
                block.reason
            )));
        }

        // Forced writes without a PIN fall back to the admin default, so
        // the record still carries a deletable hash.
        let raw_pin = if force && request.pin.is_empty() {
            "0000"
        } else {
            &request.pin
        };

        let reservation = Reservation {
            date: slot.day,
            period: slot.period,
            start: slot.start,
            end: slot.end,
            grade: request.grade,
            class_no: request.class_no,
            purpose: request.purpose.trim().to_string(),
            pin_hash: pin::hash_pin(raw_pin),
            created_at: now,
            updated_at: now,
        };
        let doc = serde_json::to_value(&reservation)
            .map_err(|e| BookingError::Storage(eyre::eyre!(e)))?;

        let slot_id = slot.id();
        if force {
            self.store
                .set(RESERVATIONS, &slot_id, doc)
                .await
                .map_err(BookingError::Storage)?;
            tracing::debug!("forced reservation written: slot={}", slot_id);
        } else {
            let written = self
                .store
                .put_unless_present(RESERVATIONS, &slot_id, doc)
                .await
                .map_err(BookingError::Storage)?;
            if !written {
                return Err(BookingError::Conflict(format!(
                    "slot {} is already reserved",
                    slot_id
                )));
            }
            tracing::debug!("reservation written: slot={}", slot_id);
        }

        Ok(reservation)
    }

    /// Deletes the reservation under `slot_id`. Admins delete
    /// unconditionally; everyone else must present the PIN whose hash was
    /// stored at creation time.
    pub async fn delete(
        &self,
        slot_id: &str,
        pin: Option<&str>,
        admin: bool,
    ) -> BookingResult<()> {
        let Some(reservation) = self.get(slot_id).await? else {
            return Err(BookingError::NotFound(format!(
                "no reservation for slot {}",
                slot_id
            )));
        };

        if !admin {
            let pin = pin.ok_or_else(|| {
                BookingError::Validation("PIN is required".to_string())
            })?;
            if pin::hash_pin(pin) != reservation.pin_hash {
                return Err(BookingError::PinMismatch);
            }
        }

        self.store
            .delete(RESERVATIONS, slot_id)
            .await
            .map_err(BookingError::Storage)?;
        tracing::debug!("reservation deleted: slot={}, admin={}", slot_id, admin);
        Ok(())
    }

    /// Point-reads every weekday slot in `[from, to]`. The store has no
    /// range queries; callers iterate constructed slot ids, so the span is
    /// validated and capped before any read.
    pub async fn list_range(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> BookingResult<Vec<(String, Reservation)>> {
        validate_range(from, to)?;

        let mut found = Vec::new();
        let mut day = from;
        while day <= to {
            if day.weekday().num_days_from_monday() < 5 {
                for period in 1..=MAX_PERIODS {
                    let slot_id = format!("{}_P{}", day, period);
                    if let Some(reservation) = self.get(&slot_id).await? {
                        found.push((slot_id, reservation));
                    }
                }
            }
            day += Duration::days(1);
        }
        Ok(found)
    }

    async fn block_for(&self, slot_id: &str) -> BookingResult<Option<Block>> {
        let doc = self
            .store
            .get(BLOCKS, slot_id)
            .await
            .map_err(BookingError::Storage)?;
        match doc {
            Some(doc) => {
                let block = serde_json::from_value(doc)
                    .map_err(|e| BookingError::Storage(eyre::eyre!(e)))?;
                Ok(Some(block))
            }
            None => Ok(None),
        }
    }
}
