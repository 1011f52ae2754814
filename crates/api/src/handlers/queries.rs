//! Handlers for query submission and listing.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use querylog_core::pagination::clamp_limit;
use querylog_core::query_log::{self, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use querylog_db::repositories::QueryLogRepo;

use crate::error::AppResult;
use crate::middleware::client_ip::ClientIp;
use crate::query::ListParams;
use crate::response::{QueryCreated, QueryList};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /queries
// ---------------------------------------------------------------------------

/// Submit a new query.
///
/// The body is taken as raw JSON and validated field by field, so a
/// wrongly-typed `text` is reported as a validation failure rather than a
/// deserialization rejection.
pub async fn submit_query(
    State(state): State<AppState>,
    ClientIp(ip): ClientIp,
    Json(body): Json<serde_json::Value>,
) -> AppResult<impl IntoResponse> {
    let submission = query_log::parse_submission(&body)?;

    let entry = QueryLogRepo::create(&state.pool, &submission, ip).await?;

    tracing::info!(query_id = entry.id, "Query submitted");

    Ok((
        StatusCode::CREATED,
        Json(QueryCreated {
            ok: true,
            id: entry.id,
            created_at: entry.created_at,
        }),
    ))
}

// ---------------------------------------------------------------------------
// GET /queries
// ---------------------------------------------------------------------------

/// List the most recent queries, newest first.
///
/// `limit` is clamped to [1, 100] and defaults to 20. The listing omits
/// `meta`; see the row type.
pub async fn list_queries(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    let limit = clamp_limit(params.parsed_limit(), DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);

    let items = QueryLogRepo::list_recent(&state.pool, limit).await?;

    Ok(Json(QueryList { ok: true, items }))
}
