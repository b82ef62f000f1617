use async_trait::async_trait;
use eyre::Result;
use serde_json::Value;
use sqlx::{Pool, Postgres};

use crate::DocumentStore;

/// Production store: one JSONB row per document. All five primitives are
/// single statements, so each is atomic per row without explicit locking.
pub struct PgStore {
    pool: Pool<Postgres>,
}

impl PgStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DocumentStore for PgStore {
    async fn get(&self, collection: &str, key: &str) -> Result<Option<Value>> {
        let doc = sqlx::query_scalar::<_, Value>(
            r#"
            SELECT doc FROM documents
            WHERE collection = $1 AND key = $2
            "#,
        )
        .bind(collection)
        .bind(key)
        .fetch_optional(&self.pool)
        .await?;

        Ok(doc)
    }

    async fn set(&self, collection: &str, key: &str, doc: Value) -> Result<()> {
        tracing::debug!("set document: collection={}, key={}", collection, key);

        sqlx::query(
            r#"
            INSERT INTO documents (collection, key, doc)
            VALUES ($1, $2, $3)
            ON CONFLICT (collection, key) DO UPDATE SET doc = EXCLUDED.doc
            "#,
        )
        .bind(collection)
        .bind(key)
        .bind(doc)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn merge(&self, collection: &str, key: &str, patch: Value) -> Result<()> {
        tracing::debug!("merge document: collection={}, key={}", collection, key);

        // JSONB || merges top-level keys, matching the trait contract.
        sqlx::query(
            r#"
            INSERT INTO documents (collection, key, doc)
            VALUES ($1, $2, $3)
            ON CONFLICT (collection, key) DO UPDATE SET doc = documents.doc || EXCLUDED.doc
            "#,
        )
        .bind(collection)
        .bind(key)
        .bind(patch)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, collection: &str, key: &str) -> Result<bool> {
        tracing::debug!("delete document: collection={}, key={}", collection, key);

        let result = sqlx::query(
            r#"
            DELETE FROM documents
            WHERE collection = $1 AND key = $2
            "#,
        )
        .bind(collection)
        .bind(key)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn put_unless_present(
        &self,
        collection: &str,
        key: &str,
        doc: Value,
    ) -> Result<bool> {
        tracing::debug!(
            "conditional put: collection={}, key={}",
            collection,
            key
        );

        let result = sqlx::query(
            r#"
            INSERT INTO documents (collection, key, doc)
            VALUES ($1, $2, $3)
            ON CONFLICT (collection, key) DO NOTHING
            "#,
        )
        .bind(collection)
        .bind(key)
        .bind(doc)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }
}
