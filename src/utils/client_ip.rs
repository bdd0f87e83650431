//! Client IP extraction from the connection or trusted proxy headers.

use axum::http::HeaderMap;
use std::net::{IpAddr, SocketAddr};

/// The client IP for a request.
///
/// With `behind_proxy` set, the first entry of `X-Forwarded-For` (the
/// original client) wins, then `X-Real-IP`; malformed header values are
/// ignored rather than recorded. Without a proxy the socket peer address is
/// authoritative; forwarded headers from arbitrary clients are never
/// trusted then.
pub fn client_ip(headers: &HeaderMap, peer: SocketAddr, behind_proxy: bool) -> String {
    if behind_proxy {
        if let Some(ip) = forwarded_ip(headers) {
            return ip;
        }
    }

    peer.ip().to_string()
}

fn forwarded_ip(headers: &HeaderMap) -> Option<String> {
    let forwarded = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim);

    if let Some(candidate) = forwarded {
        if candidate.parse::<IpAddr>().is_ok() {
            return Some(candidate.to_string());
        }
    }

    let real_ip = headers
        .get("x-real-ip")
        .and_then(|v| v.to_str().ok())
        .map(str::trim);

    if let Some(candidate) = real_ip {
        if candidate.parse::<IpAddr>().is_ok() {
            return Some(candidate.to_string());
        }
    }

    None
}
