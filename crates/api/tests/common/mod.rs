use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use querylog_api::config::ServerConfig;
use querylog_api::rate_limiter::{FixedWindowLimiter, RateLimitSettings};
use querylog_api::router::build_app_router;
use querylog_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// The CORS allow-list contains a single origin so both the accepted and
/// rejected paths can be exercised. The static directory points at the
/// workspace-level `public/` so asset tests work regardless of the test
/// working directory.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["https://a.com".to_string()],
        trust_proxy: true,
        static_dir: concat!(env!("CARGO_MANIFEST_DIR"), "/../../public").to_string(),
        request_timeout_secs: 30,
        rate_limit: RateLimitSettings {
            max_requests: 60,
            window_secs: 60,
        },
    }
}

/// Build the full application router over a fresh schema, using the same
/// construction as the production binary.
pub async fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_config(pool, test_config()).await
}

/// Same as [`build_test_app`] but with an explicit config, for tests that
/// tweak the rate limit or CORS allow-list.
pub async fn build_test_app_with_config(pool: PgPool, config: ServerConfig) -> Router {
    querylog_db::ensure_schema(&pool)
        .await
        .expect("Failed to ensure schema");

    let rate_limiter = Arc::new(FixedWindowLimiter::new(config.rate_limit.clone()));
    let state = AppState {
        pool,
        config: Arc::new(config),
        rate_limiter,
    };

    build_app_router(state)
}

/// Issue a GET request.
pub async fn get(app: Router, path: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(path)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Issue a GET request carrying an `X-Forwarded-For` address.
pub async fn get_from(app: Router, path: &str, ip: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(path)
            .header("x-forwarded-for", ip)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Issue a GET request carrying an `Origin` header.
pub async fn get_with_origin(app: Router, path: &str, origin: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(path)
            .header(header::ORIGIN, origin)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// POST a JSON body.
pub async fn post_json(app: Router, path: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// POST a JSON body carrying an `X-Forwarded-For` address.
pub async fn post_json_from(
    app: Router,
    path: &str,
    body: serde_json::Value,
    ip: &str,
) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .header("x-forwarded-for", ip)
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("Body was not valid JSON")
}
