//! Client IP resolution from HTTP request headers.

use axum::http::HeaderMap;
use std::net::SocketAddr;

/// Value recorded when no source yields an address.
pub const UNKNOWN_IP: &str = "unknown";

/// Resolves the client IP address for click recording.
///
/// Sources are tried in order and the first non-empty value wins:
///
/// 1. `X-Forwarded-For` (first comma-separated entry, trimmed)
/// 2. `X-Real-IP`
/// 3. `X-Client-IP`
/// 4. Transport peer address
/// 5. `"unknown"`
///
/// Header values are recorded as sent; they are not parsed as IP addresses.
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert("x-forwarded-for", "203.0.113.7, 10.0.0.1".parse().unwrap());
///
/// assert_eq!(resolve_client_ip(&headers, None), "203.0.113.7");
/// ```
pub fn resolve_client_ip(headers: &HeaderMap, peer: Option<SocketAddr>) -> String {
    let forwarded_for = header_str(headers, "x-forwarded-for")
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty());

    forwarded_for
        .or_else(|| non_empty_header(headers, "x-real-ip"))
        .or_else(|| non_empty_header(headers, "x-client-ip"))
        .map(str::to_string)
        .or_else(|| peer.map(|addr| addr.ip().to_string()))
        .unwrap_or_else(|| UNKNOWN_IP.to_string())
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

fn non_empty_header<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    header_str(headers, name)
        .map(str::trim)
        .filter(|v| !v.is_empty())
}
