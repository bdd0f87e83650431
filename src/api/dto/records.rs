//! DTOs for the admin user-action listings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::actions::ActionInfo;
use crate::domain::aggregation::IpGroup;

/// One IP group as returned by admin endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpGroupView {
    pub ip_address: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    pub action_count: usize,

    /// The group's records, newest-first.
    pub actions: Vec<ActionInfo>,

    pub latest_action: DateTime<Utc>,
}

impl From<IpGroup> for IpGroupView {
    fn from(group: IpGroup) -> Self {
        Self {
            ip_address: group.ip_address,
            country: group.country,
            action_count: group.actions.len(),
            actions: group.actions.into_iter().map(ActionInfo::from).collect(),
            latest_action: group.latest_action,
        }
    }
}

/// Paginated, IP-grouped listing (the canonical admin view).
#[derive(Debug, Serialize)]
pub struct GroupedActionsResponse {
    pub actions_grouped: Vec<IpGroupView>,
    /// Raw record count across all groups, unaffected by pagination.
    pub total_count: i64,
    pub total_groups: usize,
    pub total_pages: u32,
    pub current_page: u32,
}

/// Paginated flat listing of raw records.
#[derive(Debug, Serialize)]
pub struct FlatActionsResponse {
    pub actions: Vec<ActionInfo>,
    pub total_count: i64,
    pub total_pages: u32,
    pub current_page: u32,
}
