use std::collections::HashMap;

use async_trait::async_trait;
use eyre::Result;
use serde_json::Value;
use tokio::sync::Mutex;

use crate::DocumentStore;

/// In-memory store with the same semantics as [`crate::postgres::PgStore`].
/// Backs all tests and is usable for local runs without a database. The
/// single mutex makes every primitive, including the conditional put,
/// atomic with respect to concurrent callers.
#[derive(Default)]
pub struct MemoryStore {
    docs: Mutex<HashMap<(String, String), Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn addr(collection: &str, key: &str) -> (String, String) {
    (collection.to_string(), key.to_string())
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn get(&self, collection: &str, key: &str) -> Result<Option<Value>> {
        let docs = self.docs.lock().await;
        Ok(docs.get(&addr(collection, key)).cloned())
    }

    async fn set(&self, collection: &str, key: &str, doc: Value) -> Result<()> {
        let mut docs = self.docs.lock().await;
        docs.insert(addr(collection, key), doc);
        Ok(())
    }

    async fn merge(&self, collection: &str, key: &str, patch: Value) -> Result<()> {
        let mut docs = self.docs.lock().await;
        let entry = docs.entry(addr(collection, key)).or_insert(Value::Null);
        match (entry.as_object_mut(), patch) {
            (Some(existing), Value::Object(patch)) => {
                for (k, v) in patch {
                    existing.insert(k, v);
                }
            }
            (_, patch) => *entry = patch,
        }
        Ok(())
    }

    async fn delete(&self, collection: &str, key: &str) -> Result<bool> {
        let mut docs = self.docs.lock().await;
        Ok(docs.remove(&addr(collection, key)).is_some())
    }

    async fn put_unless_present(
        &self,
        collection: &str,
        key: &str,
        doc: Value,
    ) -> Result<bool> {
        let mut docs = self.docs.lock().await;
        match docs.entry(addr(collection, key)) {
            std::collections::hash_map::Entry::Occupied(_) => Ok(false),
            std::collections::hash_map::Entry::Vacant(vacant) => {
                vacant.insert(doc);
                Ok(true)
            }
        }
    }
}
