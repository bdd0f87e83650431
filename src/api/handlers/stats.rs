//! Handler for the admin stats dashboard.

use axum::{extract::State, Json};
use tracing::{debug, error, warn};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::infrastructure::cache::STATS_KEY;
use crate::state::AppState;

/// Returns the user-action dashboard summary.
///
/// # Endpoint
///
/// `GET /api/admin/stats`
///
/// # Response
///
/// Distinct-IP counters (all-time and today, per action kind) plus the most
/// recent activity grouped by IP. See
/// [`crate::application::services::AnalyticsService::get_stats`] for the
/// exact semantics.
///
/// # Cache Strategy
///
/// - **Cache hit**: the cached document is returned as-is
/// - **Cache miss**: the summary is recomputed from the log and written back
///   asynchronously (fire-and-forget)
/// - **Cache error**: logged and treated as a miss
///
/// # Errors
///
/// Returns 500 Internal Server Error if the action log could not be read;
/// no partial result is returned.
pub async fn stats_handler(State(state): State<AppState>) -> Result<Json<StatsResponse>, AppError> {
    match state.cache.get(STATS_KEY).await {
        Ok(Some(raw)) => match serde_json::from_str::<StatsResponse>(&raw) {
            Ok(cached) => {
                debug!("Serving stats from cache");
                return Ok(Json(cached));
            }
            Err(e) => warn!(error = %e, "Discarding undecodable cached stats"),
        },
        Ok(None) => {}
        Err(e) => error!("Cache error: {}", e),
    }

    let overview = state.analytics_service.get_stats().await?;
    let response = StatsResponse::from(overview);

    // Asynchronously update cache (fire-and-forget)
    if let Ok(raw) = serde_json::to_string(&response) {
        let cache = state.cache.clone();
        tokio::spawn(async move {
            if let Err(e) = cache.set(STATS_KEY, &raw, None).await {
                error!("Failed to cache stats: {}", e);
            }
        });
    }

    Ok(Json(response))
}
