use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Single documents table; (collection, key) is the document address.
    // ON CONFLICT against this primary key is the per-document transaction.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS documents (
            collection VARCHAR(64) NOT NULL,
            key VARCHAR(64) NOT NULL,
            doc JSONB NOT NULL,
            PRIMARY KEY (collection, key)
        );
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized");
    Ok(())
}
