use std::sync::Arc;

use crate::config::ServerConfig;
use crate::rate_limiter::FixedWindowLimiter;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already
/// `Clone`). Everything shared lives here rather than in process-wide
/// globals so tests can construct isolated instances.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: querylog_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Fixed-window rate limiter for `/api` routes.
    pub rate_limiter: Arc<FixedWindowLimiter>,
}
