//! Integration tests for the CORS allow-list.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{get_with_origin, test_config};
use sqlx::PgPool;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Test: an allow-listed origin is echoed back with credentials
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn allowed_origin_receives_cors_headers(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let response = get_with_origin(app, "/api/health", "https://a.com").await;
    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    assert_eq!(
        headers
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("https://a.com")
    );
    assert_eq!(
        headers
            .get("access-control-allow-credentials")
            .and_then(|v| v.to_str().ok()),
        Some("true")
    );
}

// ---------------------------------------------------------------------------
// Test: an origin off the list gets no permissive headers
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn disallowed_origin_gets_no_cors_headers(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let response = get_with_origin(app, "/api/health", "https://b.com").await;

    // The request itself still succeeds; the browser enforces the block.
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .get("access-control-allow-origin")
        .is_none());
}

// ---------------------------------------------------------------------------
// Test: an empty allow-list permits any origin
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn empty_allow_list_mirrors_any_origin(pool: PgPool) {
    let mut config = test_config();
    config.cors_origins.clear();
    let app = common::build_test_app_with_config(pool, config).await;

    let response = get_with_origin(app, "/api/health", "https://anywhere.example").await;
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("https://anywhere.example")
    );
}

// ---------------------------------------------------------------------------
// Test: requests without an Origin header pass through untouched
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn request_without_origin_passes(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let response = common::get(app, "/api/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .get("access-control-allow-origin")
        .is_none());
}

// ---------------------------------------------------------------------------
// Test: the policy also covers non-API routes
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn static_routes_are_covered_too(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let response = get_with_origin(app, "/", "https://a.com").await;
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("https://a.com")
    );
}

// ---------------------------------------------------------------------------
// Test: CORS preflight for the submission endpoint
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn preflight_allows_post_from_allowed_origin(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/queries")
        .header("Origin", "https://a.com")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    assert_eq!(
        headers
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("https://a.com")
    );

    let allow_methods = headers
        .get("access-control-allow-methods")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(
        allow_methods.contains("POST"),
        "Allow-Methods should contain POST, got: {allow_methods}"
    );
}
