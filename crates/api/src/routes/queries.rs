//! Route definitions for query submissions.
//!
//! Mounted at `/api` by `api_routes()`.

use axum::routing::post;
use axum::Router;

use crate::handlers::queries;
use crate::state::AppState;

/// Query log routes.
///
/// ```text
/// POST   /queries    -> submit_query
/// GET    /queries    -> list_queries
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/queries",
        post(queries::submit_query).get(queries::list_queries),
    )
}
