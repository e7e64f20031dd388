//! CORS (Cross-Origin Resource Sharing) configuration
//!
//! This module provides a strict CORS policy for the HTTP server, allowing
//! only localhost origins. The article API is meant to be driven by a local
//! editorial frontend, not embedded on arbitrary sites.
//!
//! # Security Policy
//!
//! - **Allowed Origins**: only `localhost`, `127.0.0.1`, and `[::1]`, any port
//! - **Allowed Methods**: GET, POST, OPTIONS (preflight)
//! - **Allowed Headers**: Content-Type, Authorization
//! - **Max Age**: 3600 seconds for preflight caching

use http::{header::HeaderValue, Method};
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};
use url::{Host, Url};

/// Standard allowed headers for the article API
pub const ALLOWED_HEADERS: [http::header::HeaderName; 2] =
    [http::header::CONTENT_TYPE, http::header::AUTHORIZATION];

/// Standard allowed methods for the article API
pub const ALLOWED_METHODS: [Method; 3] = [Method::GET, Method::POST, Method::OPTIONS];

/// Default max age for preflight cache (1 hour)
pub const DEFAULT_MAX_AGE_SECS: u64 = 3600;

/// Creates a strict CORS layer that only allows localhost origins.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(|origin, _| {
            is_localhost_origin(origin)
        }))
        .allow_methods(ALLOWED_METHODS)
        .allow_headers(ALLOWED_HEADERS)
        .max_age(Duration::from_secs(DEFAULT_MAX_AGE_SECS))
}

/// Creates a permissive CORS layer for development/testing.
///
/// Not safe for production use: allows all origins.
pub fn cors_layer_permissive() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods(tower_http::cors::Any)
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(DEFAULT_MAX_AGE_SECS))
}

/// Checks whether an Origin header value names a localhost origin.
///
/// Accepts `http`/`https` origins whose host is `localhost`, `127.0.0.1`, or
/// the IPv6 loopback, on any port. Anything unparseable is rejected.
pub fn is_localhost_origin(origin: &HeaderValue) -> bool {
    let Ok(origin_str) = origin.to_str() else {
        return false;
    };
    let Ok(parsed) = Url::parse(origin_str) else {
        return false;
    };
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return false;
    }
    match parsed.host() {
        Some(Host::Domain(domain)) => domain.eq_ignore_ascii_case("localhost"),
        Some(Host::Ipv4(ip)) => ip.is_loopback(),
        Some(Host::Ipv6(ip)) => ip.is_loopback(),
        None => false,
    }
}
