//! Shared response envelope types for API handlers.
//!
//! All API responses use an `{ "ok": ... }` envelope. Use these typed
//! structs instead of ad-hoc `serde_json::json!` to get compile-time type
//! safety and consistent serialization.

use serde::Serialize;

use querylog_core::types::{DbId, Timestamp};
use querylog_db::models::query_log::QueryLogListItem;

/// Bare `{ "ok": true }` acknowledgement, used by the health endpoint.
#[derive(Debug, Serialize)]
pub struct Ack {
    pub ok: bool,
}

/// Response for a successful submission.
///
/// `createdAt` is camel-cased on the wire; the listing keeps snake case.
#[derive(Debug, Serialize)]
pub struct QueryCreated {
    pub ok: bool,
    pub id: DbId,
    #[serde(rename = "createdAt")]
    pub created_at: Timestamp,
}

/// Response for the listing endpoint.
#[derive(Debug, Serialize)]
pub struct QueryList {
    pub ok: bool,
    pub items: Vec<QueryLogListItem>,
}
