//! Repository for the `query_logs` table.

use std::net::IpAddr;

use sqlx::PgPool;

use querylog_core::query_log::QuerySubmission;

use crate::models::query_log::{QueryLog, QueryLogListItem};

// ---------------------------------------------------------------------------
// Column lists
// ---------------------------------------------------------------------------

/// Column list for full-row SELECT queries.
const COLUMNS: &str = "id, text, ip, meta, created_at";

/// Column list for the listing endpoint. Omits `meta`.
const LIST_COLUMNS: &str = "id, text, ip, created_at";

// ---------------------------------------------------------------------------
// QueryLogRepo
// ---------------------------------------------------------------------------

/// Insert and listing operations for query log entries.
pub struct QueryLogRepo;

impl QueryLogRepo {
    /// Insert one entry and return the stored row.
    ///
    /// An omitted `meta` is stored as an empty object. `id` and
    /// `created_at` are assigned by the database.
    pub async fn create(
        pool: &PgPool,
        submission: &QuerySubmission,
        ip: Option<IpAddr>,
    ) -> Result<QueryLog, sqlx::Error> {
        let meta = submission
            .meta
            .clone()
            .unwrap_or_else(|| serde_json::Value::Object(serde_json::Map::new()));

        let query = format!(
            "INSERT INTO query_logs (text, ip, meta) VALUES ($1, $2, $3) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, QueryLog>(&query)
            .bind(&submission.text)
            .bind(ip)
            .bind(meta)
            .fetch_one(pool)
            .await
    }

    /// Fetch the most recent entries, newest first.
    ///
    /// Ordered by `created_at` descending with `id` as a tiebreaker for
    /// entries sharing a timestamp. The caller clamps `limit`.
    pub async fn list_recent(
        pool: &PgPool,
        limit: i64,
    ) -> Result<Vec<QueryLogListItem>, sqlx::Error> {
        let query = format!(
            "SELECT {LIST_COLUMNS} FROM query_logs \
             ORDER BY created_at DESC, id DESC \
             LIMIT $1"
        );
        sqlx::query_as::<_, QueryLogListItem>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Count all stored entries.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*)::BIGINT FROM query_logs")
            .fetch_one(pool)
            .await
    }
}
