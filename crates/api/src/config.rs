use crate::rate_limiter::RateLimitSettings;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development. In production,
/// override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`). If taken, the next higher ports are
    /// tried in turn.
    pub port: u16,
    /// Allowed CORS origins, parsed from the comma-separated `CORS_ORIGIN`
    /// env var. An empty list permits any origin.
    pub cors_origins: Vec<String>,
    /// Whether to honour `X-Forwarded-For` when resolving client addresses
    /// (default: `true`).
    pub trust_proxy: bool,
    /// Directory served for non-`/api` paths (default: `public`).
    pub static_dir: String,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Fixed-window rate limit applied to `/api` routes.
    pub rate_limit: RateLimitSettings,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default   |
    /// |---------------------------|-----------|
    /// | `HOST`                    | `0.0.0.0` |
    /// | `PORT`                    | `8080`    |
    /// | `CORS_ORIGIN`             | (empty)   |
    /// | `TRUST_PROXY`             | `true`    |
    /// | `STATIC_DIR`              | `public`  |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`      |
    /// | `RATE_LIMIT_MAX_REQUESTS` | `60`      |
    /// | `RATE_LIMIT_WINDOW_SECS`  | `60`      |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGIN")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let trust_proxy = std::env::var("TRUST_PROXY")
            .map(|v| !matches!(v.trim(), "false" | "0" | "off"))
            .unwrap_or(true);

        let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| "public".into());

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let max_requests: u32 = std::env::var("RATE_LIMIT_MAX_REQUESTS")
            .unwrap_or_else(|_| "60".into())
            .parse()
            .expect("RATE_LIMIT_MAX_REQUESTS must be a valid u32");

        let window_secs: u64 = std::env::var("RATE_LIMIT_WINDOW_SECS")
            .unwrap_or_else(|_| "60".into())
            .parse()
            .expect("RATE_LIMIT_WINDOW_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            trust_proxy,
            static_dir,
            request_timeout_secs,
            rate_limit: RateLimitSettings {
                max_requests,
                window_secs,
            },
        }
    }
}
