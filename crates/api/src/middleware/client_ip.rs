//! Client address resolution.
//!
//! Resolves the originating address of a request: the first entry of the
//! `X-Forwarded-For` chain when the trusted-proxy setting is on, otherwise
//! the socket peer address.

use std::convert::Infallible;
use std::net::{IpAddr, SocketAddr};

use axum::extract::connect_info::ConnectInfo;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::HeaderMap;

use crate::state::AppState;

/// The resolved client address, if any.
///
/// Extractor used by the rate-limit middleware and the submission handler.
#[derive(Debug, Clone, Copy)]
pub struct ClientIp(pub Option<IpAddr>);

impl FromRequestParts<AppState> for ClientIp {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| *addr);

        Ok(ClientIp(resolve_client_ip(
            &parts.headers,
            peer,
            state.config.trust_proxy,
        )))
    }
}

/// Resolve the client address from headers and the peer socket address.
///
/// With `trust_proxy` on, the first parseable entry of `X-Forwarded-For`
/// wins; the peer address is the fallback either way.
pub fn resolve_client_ip(
    headers: &HeaderMap,
    peer: Option<SocketAddr>,
    trust_proxy: bool,
) -> Option<IpAddr> {
    if trust_proxy {
        if let Some(forwarded) = headers.get("x-forwarded-for").and_then(|v| v.to_str().ok()) {
            if let Some(first) = forwarded.split(',').next() {
                if let Ok(ip) = first.trim().parse() {
                    return Some(ip);
                }
            }
        }
    }

    peer.map(|addr| addr.ip())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn peer() -> Option<SocketAddr> {
        Some("192.0.2.1:4711".parse().unwrap())
    }

    #[test]
    fn forwarded_for_takes_first_entry() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-forwarded-for",
            HeaderValue::from_static("203.0.113.7, 10.0.0.1"),
        );

        let ip = resolve_client_ip(&headers, peer(), true);
        assert_eq!(ip, Some("203.0.113.7".parse().unwrap()));
    }

    #[test]
    fn forwarded_for_is_ignored_without_trust_proxy() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", HeaderValue::from_static("203.0.113.7"));

        let ip = resolve_client_ip(&headers, peer(), false);
        assert_eq!(ip, Some("192.0.2.1".parse().unwrap()));
    }

    #[test]
    fn unparseable_forwarded_for_falls_back_to_peer() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", HeaderValue::from_static("not-an-ip"));

        let ip = resolve_client_ip(&headers, peer(), true);
        assert_eq!(ip, Some("192.0.2.1".parse().unwrap()));
    }

    #[test]
    fn no_header_uses_peer_address() {
        let ip = resolve_client_ip(&HeaderMap::new(), peer(), true);
        assert_eq!(ip, Some("192.0.2.1".parse().unwrap()));
    }

    #[test]
    fn nothing_resolves_to_none() {
        assert_eq!(resolve_client_ip(&HeaderMap::new(), None, true), None);
    }
}
