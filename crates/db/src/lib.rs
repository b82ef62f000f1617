pub mod mock;
pub mod postgres;
pub mod repositories;
pub mod schema;

use async_trait::async_trait;
use eyre::Result;
use serde_json::Value;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};

/// Keyed record space for reservations, one document per slot id.
pub const RESERVATIONS: &str = "reservations";
/// Keyed record space for administrative blocks, same slot-id keys.
pub const BLOCKS: &str = "blocks";
/// Configuration collection: settings and weekly assignment overrides.
pub const CONFIG: &str = "config";

pub const SETTINGS_KEY: &str = "settings";
pub const ASSIGNMENTS_KEY: &str = "weekly_assignments";

/// Longest span, in days, a range listing will scan. Listings are point
/// reads per slot id, so the span bounds the number of store reads a
/// single call can issue.
pub const MAX_LIST_RANGE_DAYS: i64 = 92;

/// Document-style key-value storage used by every repository.
///
/// Implementations must make `put_unless_present` an atomic
/// read-check-write with respect to other writers on the same key; that
/// single primitive is what keeps two racing bookings from both landing
/// on one slot.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn get(&self, collection: &str, key: &str) -> Result<Option<Value>>;

    /// Full overwrite, creating the document if absent.
    async fn set(&self, collection: &str, key: &str, doc: Value) -> Result<()>;

    /// Shallow merge of `patch` into the existing document (upsert when
    /// absent). Only top-level object fields are merged.
    async fn merge(&self, collection: &str, key: &str, patch: Value) -> Result<()>;

    /// Returns false when there was nothing to delete.
    async fn delete(&self, collection: &str, key: &str) -> Result<bool>;

    /// Conditional insert: writes `doc` only if no document exists under
    /// the key, and reports whether the write happened. The losing writer
    /// observes `false` and leaves no partial state.
    async fn put_unless_present(&self, collection: &str, key: &str, doc: Value)
        -> Result<bool>;
}

pub type DbPool = Pool<Postgres>;

pub async fn create_pool(database_url: &str) -> Result<DbPool> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;

    Ok(pool)
}
