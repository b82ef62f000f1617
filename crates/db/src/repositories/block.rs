use std::sync::Arc;

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};

use roombook_core::errors::{BookingError, BookingResult};
use roombook_core::models::block::Block;
use roombook_core::models::slot::{Slot, MAX_PERIODS};

use crate::repositories::validate_range;
use crate::{DocumentStore, BLOCKS};

/// Admin-managed denylist of slots. Not a contention path, so plain
/// single-document upserts and deletes suffice.
pub struct BlockRepository {
    store: Arc<dyn DocumentStore>,
}

impl BlockRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn get(&self, slot_id: &str) -> BookingResult<Option<Block>> {
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

    /// Upserts a block for `slot`; an existing block is overwritten.
    pub async fn set_block(
        &self,
        slot: &Slot,
        reason: &str,
        admin: Option<&str>,
        now: DateTime<Utc>,
    ) -> BookingResult<Block> {
        let reason = reason.trim();
        if reason.is_empty() {
            return Err(BookingError::Validation(
                "block reason must not be empty".to_string(),
            ));
        }

        let block = Block {
            date: slot.day,
            period: slot.period,
            reason: reason.to_string(),
            admin: admin.map(|a| a.to_string()),
            created_at: now,
        };
        let doc = serde_json::to_value(&block)
            .map_err(|e| BookingError::Storage(eyre::eyre!(e)))?;

        let slot_id = slot.id();
        self.store
            .set(BLOCKS, &slot_id, doc)
            .await
            .map_err(BookingError::Storage)?;
        tracing::debug!("block set: slot={}, reason={}", slot_id, reason);
        Ok(block)
    }

    pub async fn clear_block(&self, slot_id: &str) -> BookingResult<()> {
        let removed = self
            .store
            .delete(BLOCKS, slot_id)
            .await
            .map_err(BookingError::Storage)?;
        if !removed {
            return Err(BookingError::NotFound(format!(
                "slot {} is not blocked",
                slot_id
            )));
        }
        tracing::debug!("block cleared: slot={}", slot_id);
        Ok(())
    }

    pub async fn list_range(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> BookingResult<Vec<(String, Block)>> {
        validate_range(from, to)?;

        let mut found = Vec::new();
        let mut day = from;
        while day <= to {
            if day.weekday().num_days_from_monday() < 5 {
                for period in 1..=MAX_PERIODS {
                    let slot_id = format!("{}_P{}", day, period);
                    if let Some(block) = self.get(&slot_id).await? {
                        found.push((slot_id, block));
                    }
                }
            }
            day += Duration::days(1);
        }
        Ok(found)
    }
}
