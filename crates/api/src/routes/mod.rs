pub mod health;
pub mod queries;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /health       liveness probe (GET)
/// /queries      submit (POST), list recent (GET)
/// ```
///
/// The rate-limit layer wraps this router as a whole, so every `/api` path
/// is counted; static assets outside `/api` are not.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(queries::router())
}
