//! Handlers for the admin user-action listings.

use axum::{
    extract::{Query, State},
    Json,
};
use serde_json::json;

use crate::api::dto::actions::ActionInfo;
use crate::api::dto::pagination::PaginationParams;
use crate::api::dto::records::{FlatActionsResponse, GroupedActionsResponse, IpGroupView};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all user actions grouped by IP address (the canonical view).
///
/// # Endpoint
///
/// `GET /api/admin/actions`
///
/// # Query Parameters
///
/// - `page` (optional): 1-indexed page number (default: 1)
/// - `page_size` (optional): groups per page (default: 25, max: 1000)
///
/// # Response
///
/// Pagination runs over IP groups, not raw records: `total_pages` is
/// `ceil(total_groups / page_size)` while `total_count` stays the raw record
/// count. Groups are sorted by latest activity, newest first; a page past
/// the end yields an empty `actions_grouped` array.
///
/// # Errors
///
/// Returns 400 Bad Request if pagination parameters are invalid.
pub async fn grouped_actions_handler(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<GroupedActionsResponse>, AppError> {
    let (page, page_size) = params
        .validate_and_resolve()
        .map_err(|e| AppError::bad_request(e, json!({})))?;

    let result = state.analytics_service.list_grouped(page, page_size).await?;

    Ok(Json(GroupedActionsResponse {
        actions_grouped: result.groups.into_iter().map(IpGroupView::from).collect(),
        total_count: result.total_count,
        total_groups: result.total_groups,
        total_pages: result.total_pages,
        current_page: result.current_page,
    }))
}

/// Lists all user actions as a flat, newest-first page of raw records.
///
/// # Endpoint
///
/// `GET /api/admin/actions/flat`
///
/// # Query Parameters
///
/// Same as the grouped listing; here `page_size` counts records.
///
/// # Errors
///
/// Returns 400 Bad Request if pagination parameters are invalid.
pub async fn flat_actions_handler(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<FlatActionsResponse>, AppError> {
    let (page, page_size) = params
        .validate_and_resolve()
        .map_err(|e| AppError::bad_request(e, json!({})))?;

    let result = state.analytics_service.list_flat(page, page_size).await?;

    Ok(Json(FlatActionsResponse {
        actions: result.actions.into_iter().map(ActionInfo::from).collect(),
        total_count: result.total_count,
        total_pages: result.total_pages,
        current_page: result.current_page,
    }))
}
