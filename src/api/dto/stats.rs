//! DTOs for the admin stats dashboard.

use serde::{Deserialize, Serialize};

use super::records::IpGroupView;
use crate::application::services::StatsOverview;

/// Dashboard summary of user actions.
///
/// The four counters are distinct-IP counts, not raw record counts.
/// Serialized into the stats cache as-is, so the type round-trips through
/// JSON.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResponse {
    pub total_checkouts: i64,
    pub total_buy_nows: i64,
    pub today_checkouts: i64,
    pub today_buy_nows: i64,
    /// Recent activity grouped by IP, most recently active groups first.
    pub recent_actions_grouped: Vec<IpGroupView>,
}

impl From<StatsOverview> for StatsResponse {
    fn from(overview: StatsOverview) -> Self {
        Self {
            total_checkouts: overview.total_checkouts,
            total_buy_nows: overview.total_buy_nows,
            today_checkouts: overview.today_checkouts,
            today_buy_nows: overview.today_buy_nows,
            recent_actions_grouped: overview
                .recent_groups
                .into_iter()
                .map(IpGroupView::from)
                .collect(),
        }
    }
}
