//! Fixed-window request rate limiting.
//!
//! Counts requests per client address within fixed time windows. State is
//! held in process memory: it is volatile and resets on restart.

use std::collections::HashMap;
use std::net::IpAddr;
use std::time::{SystemTime, UNIX_EPOCH};

use tokio::sync::Mutex;

/// Entries beyond this many distinct addresses trigger a sweep of expired
/// windows on the next check.
const PRUNE_THRESHOLD: usize = 1024;

/// Rate limit tunables.
#[derive(Debug, Clone)]
pub struct RateLimitSettings {
    /// Maximum requests per address per window.
    pub max_requests: u32,
    /// Window size in seconds.
    pub window_secs: u64,
}

impl Default for RateLimitSettings {
    fn default() -> Self {
        Self {
            max_requests: 60,
            window_secs: 60,
        }
    }
}

/// Outcome of a rate limit check, carrying everything needed for the
/// standard `RateLimit-*` response headers.
#[derive(Debug, Clone, Copy)]
pub struct RateLimitDecision {
    pub allowed: bool,
    pub limit: u32,
    pub remaining: u32,
    /// Seconds until the current window resets.
    pub reset_secs: u64,
}

#[derive(Debug, Clone, Copy)]
struct Window {
    start: u64,
    count: u32,
}

/// Fixed-window counter keyed by client address.
#[derive(Debug)]
pub struct FixedWindowLimiter {
    settings: RateLimitSettings,
    windows: Mutex<HashMap<IpAddr, Window>>,
}

impl FixedWindowLimiter {
    pub fn new(settings: RateLimitSettings) -> Self {
        Self {
            settings,
            windows: Mutex::new(HashMap::new()),
        }
    }

    pub fn settings(&self) -> &RateLimitSettings {
        &self.settings
    }

    /// Record a request for `key` and decide whether it is allowed.
    pub async fn check(&self, key: IpAddr) -> RateLimitDecision {
        self.check_at(key, current_timestamp()).await
    }

    /// Window arithmetic at an explicit timestamp, separated out so tests
    /// can pin the clock.
    async fn check_at(&self, key: IpAddr, now: u64) -> RateLimitDecision {
        let window_secs = self.settings.window_secs.max(1);
        let window_start = now - now % window_secs;

        let mut windows = self.windows.lock().await;

        if windows.len() > PRUNE_THRESHOLD {
            windows.retain(|_, w| w.start + window_secs > now);
        }

        let window = windows.entry(key).or_insert(Window {
            start: window_start,
            count: 0,
        });
        if window.start != window_start {
            // A new window has begun; the counter resets.
            *window = Window {
                start: window_start,
                count: 0,
            };
        }

        let reset_secs = window_start + window_secs - now;
        let limit = self.settings.max_requests;

        if window.count >= limit {
            return RateLimitDecision {
                allowed: false,
                limit,
                remaining: 0,
                reset_secs,
            };
        }

        window.count += 1;
        RateLimitDecision {
            allowed: true,
            limit,
            remaining: limit - window.count,
            reset_secs,
        }
    }
}

pub fn current_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_secs()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
