//! Handler for tracking user actions.

use axum::{
    extract::{ConnectInfo, State},
    http::HeaderMap,
    Json,
};
use std::net::SocketAddr;
use tracing::{debug, warn};
use validator::Validate;

use crate::api::dto::actions::{TrackActionRequest, TrackActionResponse};
use crate::application::services::TrackAction;
use crate::error::AppError;
use crate::infrastructure::cache::STATS_KEY;
use crate::state::AppState;
use crate::utils::client_ip;

/// Records a checkout or buy-now action.
///
/// # Endpoint
///
/// `POST /api/actions`
///
/// # Request Body
///
/// ```json
/// {
///   "action": "checkout",        // or "buy_now"
///   "product_id": 42,            // optional
///   "quantity": 2,               // optional, default 1
///   "total_price": "39.98",      // optional
///   "ip_address": "1.2.3.4"      // optional; derived from the connection when absent
/// }
/// ```
///
/// # Behavior
///
/// The client country is resolved once here, at recording time, and stored
/// with the record. After a successful write the cached admin stats view is
/// invalidated so the dashboard picks the action up on its next load.
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails.
/// Returns 500 Internal Server Error if the record could not be persisted;
/// nothing is partially stored.
pub async fn track_action_handler(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    Json(payload): Json<TrackActionRequest>,
) -> Result<Json<TrackActionResponse>, AppError> {
    payload.validate()?;

    let ip_address = payload
        .ip_address
        .filter(|ip| !ip.trim().is_empty())
        .unwrap_or_else(|| client_ip(&headers, addr, state.behind_proxy));

    let recorded = state
        .recorder_service
        .record(TrackAction {
            action: payload.action,
            product_id: payload.product_id,
            quantity: payload.quantity,
            total_price: payload.total_price,
            ip_address: Some(ip_address),
        })
        .await?;

    debug!(id = recorded.id, action = %recorded.action, "Recorded user action");

    if let Err(e) = state.cache.invalidate(STATS_KEY).await {
        warn!(error = ?e, "Failed to invalidate stats cache after recording");
    }

    Ok(Json(TrackActionResponse { success: true }))
}
