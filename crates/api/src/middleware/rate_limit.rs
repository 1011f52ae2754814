//! Rate-limit middleware for `/api` routes.
//!
//! Applies the fixed-window limiter keyed by resolved client address and
//! attaches the standard `RateLimit-*` headers to every response (the
//! legacy `X-RateLimit-*` names are not emitted).

use std::net::{IpAddr, Ipv4Addr};

use axum::extract::{Request, State};
use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::middleware::client_ip::ClientIp;
use crate::rate_limiter::RateLimitDecision;
use crate::state::AppState;

const LIMIT_HEADER: HeaderName = HeaderName::from_static("ratelimit-limit");
const REMAINING_HEADER: HeaderName = HeaderName::from_static("ratelimit-remaining");
const RESET_HEADER: HeaderName = HeaderName::from_static("ratelimit-reset");

pub async fn rate_limit_middleware(
    State(state): State<AppState>,
    ClientIp(ip): ClientIp,
    request: Request,
    next: Next,
) -> Response {
    // Clients with no resolvable address share one bucket.
    let key = ip.unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED));

    let decision = state.rate_limiter.check(key).await;

    if decision.allowed {
        let mut response = next.run(request).await;
        apply_rate_limit_headers(&mut response, &decision);
        response
    } else {
        tracing::warn!(client = %key, "Rate limit exceeded");

        let mut response = (
            StatusCode::TOO_MANY_REQUESTS,
            Json(json!({
                "ok": false,
                "code": "RATE_LIMITED",
                "error": "Too many requests, please try again later",
            })),
        )
            .into_response();
        apply_rate_limit_headers(&mut response, &decision);
        response
    }
}

fn apply_rate_limit_headers(response: &mut Response, decision: &RateLimitDecision) {
    let headers = response.headers_mut();
    headers.insert(LIMIT_HEADER, HeaderValue::from(decision.limit));
    headers.insert(REMAINING_HEADER, HeaderValue::from(decision.remaining));
    headers.insert(RESET_HEADER, HeaderValue::from(decision.reset_secs));
}
