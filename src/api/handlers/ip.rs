//! Handler for the client IP echo endpoint.

use axum::{
    extract::{ConnectInfo, State},
    http::HeaderMap,
    Json,
};
use std::net::SocketAddr;

use crate::api::dto::ip::IpResponse;
use crate::state::AppState;
use crate::utils::client_ip;

/// Echoes the client IP as the server sees it.
///
/// # Endpoint
///
/// `GET /api/ip`
///
/// The storefront calls this before tracking an action; recording the same
/// address the server would derive keeps per-IP grouping consistent whether
/// or not the client supplies `ip_address` itself. Forwarded headers are
/// honored only when the service is configured as behind a trusted proxy.
pub async fn ip_handler(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
) -> Json<IpResponse> {
    Json(IpResponse {
        ip: client_ip(&headers, addr, state.behind_proxy),
    })
}
