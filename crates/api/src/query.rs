//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Listing parameters (`?limit=`).
///
/// `limit` is deserialized as a raw string so that a non-numeric value
/// falls back to the default instead of rejecting the request. Clamping to
/// the valid range happens in the handler via `clamp_limit`.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub limit: Option<String>,
}

impl ListParams {
    /// The parsed `limit` value, or `None` when absent or non-numeric.
    pub fn parsed_limit(&self) -> Option<i64> {
        self.limit.as_deref().and_then(|s| s.trim().parse().ok())
    }
}
