use axum::{routing::get, Json, Router};

use crate::response::Ack;
use crate::state::AppState;

/// GET /health -- liveness probe.
///
/// Touches no storage; the probe keeps answering while the database is
/// down.
async fn health_check() -> Json<Ack> {
    Json(Ack { ok: true })
}

/// Mount health check routes (mounted under `/api` by `api_routes`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
