use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{Datelike, NaiveDate, Weekday};
use tokio::sync::RwLock;

use roombook_core::errors::{BookingError, BookingResult};
use roombook_core::models::assignment;
use roombook_core::models::settings::Settings;

use crate::{DocumentStore, ASSIGNMENTS_KEY, CONFIG, SETTINGS_KEY};

/// Read-through cached access to settings and the weekly assignment table.
///
/// Both caches are filled on first read and invalidated explicitly by every
/// write, so an admin update is visible to the next read without a process
/// restart.
pub struct ConfigRepository {
    store: Arc<dyn DocumentStore>,
    settings_cache: RwLock<Option<Settings>>,
    overrides_cache: RwLock<Option<BTreeMap<NaiveDate, u8>>>,
}

impl ConfigRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            settings_cache: RwLock::new(None),
            overrides_cache: RwLock::new(None),
        }
    }

    /// Current settings; seeds the store with defaults on first access.
    pub async fn settings(&self) -> BookingResult<Settings> {
        if let Some(settings) = self.settings_cache.read().await.clone() {
            return Ok(settings);
        }

        let doc = self
            .store
            .get(CONFIG, SETTINGS_KEY)
            .await
            .map_err(BookingError::Storage)?;
        let settings = match doc {
            Some(doc) => serde_json::from_value(doc)
                .map_err(|e| BookingError::Storage(eyre::eyre!(e)))?,
            None => {
                let defaults = Settings::default();
                let doc = serde_json::to_value(&defaults)
                    .map_err(|e| BookingError::Storage(eyre::eyre!(e)))?;
                self.store
                    .set(CONFIG, SETTINGS_KEY, doc)
                    .await
                    .map_err(BookingError::Storage)?;
                defaults
            }
        };

        *self.settings_cache.write().await = Some(settings.clone());
        Ok(settings)
    }

    /// Wholesale settings replacement (admin action).
    pub async fn put_settings(&self, settings: &Settings) -> BookingResult<()> {
        settings.validate()?;
        let doc = serde_json::to_value(settings)
            .map_err(|e| BookingError::Storage(eyre::eyre!(e)))?;
        self.store
            .set(CONFIG, SETTINGS_KEY, doc)
            .await
            .map_err(BookingError::Storage)?;
        *self.settings_cache.write().await = Some(settings.clone());
        tracing::debug!("settings updated");
        Ok(())
    }

    /// Full assignment table: compiled-in defaults overlaid by persisted
    /// overrides, override winning per Monday.
    pub async fn assignments(&self) -> BookingResult<BTreeMap<NaiveDate, u8>> {
        let overrides = self.overrides().await?;
        Ok(assignment::merged_assignments(&overrides))
    }

    /// Priority grade for the week of `monday`, if any.
    pub async fn assigned_grade(&self, monday: NaiveDate) -> BookingResult<Option<u8>> {
        Ok(self.assignments().await?.get(&monday).copied())
    }

    /// Records an override for one Monday (admin action).
    pub async fn put_assignment(&self, monday: NaiveDate, grade: u8) -> BookingResult<()> {
        if monday.weekday() != Weekday::Mon {
            return Err(BookingError::Validation(format!(
                "{} is not a Monday",
                monday
            )));
        }
        if !(1..=6).contains(&grade) {
            return Err(BookingError::Validation(format!(
                "grade must be between 1 and 6, got {}",
                grade
            )));
        }

        let mut patch = serde_json::Map::new();
        patch.insert(monday.to_string(), serde_json::Value::from(grade));
        self.store
            .merge(CONFIG, ASSIGNMENTS_KEY, serde_json::Value::Object(patch))
            .await
            .map_err(BookingError::Storage)?;
        self.invalidate().await;
        tracing::debug!("assignment override set: monday={}, grade={}", monday, grade);
        Ok(())
    }

    /// Removes an override; the compiled-in default (if any) applies again.
    pub async fn clear_assignment(&self, monday: NaiveDate) -> BookingResult<()> {
        let mut overrides = self.overrides().await?;
        if overrides.remove(&monday).is_none() {
            return Err(BookingError::NotFound(format!(
                "no assignment override for {}",
                monday
            )));
        }

        let doc = serde_json::to_value(
            overrides
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect::<BTreeMap<String, u8>>(),
        )
        .map_err(|e| BookingError::Storage(eyre::eyre!(e)))?;
        self.store
            .set(CONFIG, ASSIGNMENTS_KEY, doc)
            .await
            .map_err(BookingError::Storage)?;
        self.invalidate().await;
        tracing::debug!("assignment override cleared: monday={}", monday);
        Ok(())
    }

    /// Drops both caches; the next read goes back to the store.
    pub async fn invalidate(&self) {
        *self.settings_cache.write().await = None;
        *self.overrides_cache.write().await = None;
    }

    async fn overrides(&self) -> BookingResult<BTreeMap<NaiveDate, u8>> {
        if let Some(overrides) = self.overrides_cache.read().await.clone() {
            return Ok(overrides);
        }

        let doc = self
            .store
            .get(CONFIG, ASSIGNMENTS_KEY)
            .await
            .map_err(BookingError::Storage)?;
        let overrides = match doc {
            Some(doc) => {
                let raw: BTreeMap<String, u8> = serde_json::from_value(doc)
                    .map_err(|e| BookingError::Storage(eyre::eyre!(e)))?;
                let mut parsed = BTreeMap::new();
                for (monday, grade) in raw {
                    let monday = monday.parse::<NaiveDate>().map_err(|_| {
                        BookingError::Storage(eyre::eyre!(
                            "malformed assignment key: {}",
                            monday
                        ))
                    })?;
                    parsed.insert(monday, grade);
                }
                parsed
            }
            None => BTreeMap::new(),
        };

        *self.overrides_cache.write().await = Some(overrides.clone());
        Ok(overrides)
    }
}
