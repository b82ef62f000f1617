use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetBlockRequest {
    pub reason: String,
    #[serde(default)]
    pub admin: Option<String>,
}

/// Admin-imposed denial of a slot, independent of reservation state. Keyed
/// by the same slot id as reservations but stored in its own collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub date: NaiveDate,
    pub period: u8,
    pub reason: String,
    pub admin: Option<String>,
    pub created_at: DateTime<Utc>,
}
