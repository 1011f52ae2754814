//! Pagination clamping helpers shared by the API and repository layers.

/// Clamp an optional limit into `[1, max]`, falling back to `default` when
/// absent.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).clamp(1, max)
}
