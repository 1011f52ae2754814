//! Database layer: pool construction, schema bootstrap, models and
//! repositories.

pub mod models;
pub mod repositories;

use sqlx::postgres::PgPoolOptions;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Create the `query_logs` table and its index if they do not exist.
///
/// The statements are idempotent so this runs unconditionally at startup;
/// there is no versioned migration machinery.
pub async fn ensure_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS query_logs (
            id BIGSERIAL PRIMARY KEY,
            text TEXT NOT NULL,
            ip INET,
            meta JSONB NOT NULL DEFAULT '{}'::jsonb,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_query_logs_created_at
         ON query_logs (created_at DESC)",
    )
    .execute(pool)
    .await?;

    tracing::debug!("Database schema ensured");
    Ok(())
}
