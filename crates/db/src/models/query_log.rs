//! Query log entity models.
//!
//! Entries are append-only: no `updated_at`, no update or delete paths.

use std::net::IpAddr;

use serde::Serialize;
use sqlx::FromRow;

use querylog_core::types::{DbId, Timestamp};

/// A persisted query log entry. Immutable once created.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct QueryLog {
    pub id: DbId,
    pub text: String,
    /// Originating address, if one could be resolved at submission time.
    pub ip: Option<IpAddr>,
    /// Free-form metadata object, stored verbatim.
    pub meta: serde_json::Value,
    pub created_at: Timestamp,
}

/// A listing row. The listing endpoint omits `meta`, so this row type does
/// not select it.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct QueryLogListItem {
    pub id: DbId,
    pub text: String,
    pub ip: Option<IpAddr>,
    pub created_at: Timestamp,
}
