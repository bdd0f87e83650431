//! Read-time aggregation of user actions into per-IP groups.
//!
//! Grouping by IP address is an approximation of "unique user" (NAT, shared
//! and dynamic IPs collapse or split real users); the admin views document
//! the numbers as distinct IPs, and this module makes no stronger claim.
//!
//! All functions here are pure: groups are derived views recomputed on every
//! read, with no identity or persistence of their own.

use chrono::{DateTime, Utc};
use std::collections::HashMap;

use crate::domain::entities::UserAction;

/// Group key for records without an IP address.
pub const UNKNOWN_IP: &str = "unknown";

/// Actions sharing one IP address, newest-first.
#[derive(Debug, Clone)]
pub struct IpGroup {
    /// Grouping key; the [`UNKNOWN_IP`] sentinel for records without an IP.
    pub ip_address: String,
    /// Country of the group's newest record. Not merged across records:
    /// older records of the same IP may carry a different country.
    pub country: Option<String>,
    /// The group's records, newest-first.
    pub actions: Vec<UserAction>,
    /// `created_at` of the newest record (`actions[0]`).
    pub latest_action: DateTime<Utc>,
}

impl IpGroup {
    pub fn action_count(&self) -> usize {
        self.actions.len()
    }
}

/// Groups records by IP address.
///
/// `records` must be sorted newest-first, with equal timestamps in insertion
/// order (the order repositories return). A single pass then yields groups
/// already sorted by `latest_action` descending: a group's first occurrence
/// in the scan is its newest record, so first-appearance order is exactly
/// latest-descending with ties broken by insertion order. Within each group,
/// records keep the scan order (newest-first).
pub fn group_by_ip(records: Vec<UserAction>) -> Vec<IpGroup> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<IpGroup> = Vec::new();

    for record in records {
        let key = record.group_key();
        match index.get(key) {
            Some(&at) => groups[at].actions.push(record),
            None => {
                index.insert(key.to_string(), groups.len());
                groups.push(IpGroup {
                    ip_address: key.to_string(),
                    country: record.country.clone(),
                    latest_action: record.created_at,
                    actions: vec![record],
                });
            }
        }
    }

    groups
}

/// Number of pages needed to show `total` items `limit` at a time.
pub fn page_count(total: usize, limit: u32) -> u32 {
    if limit == 0 {
        return 0;
    }
    total.div_ceil(limit as usize) as u32
}

/// The 1-indexed `page` of `groups`, `limit` groups per page.
///
/// A page past the end is an empty list, not an error.
pub fn page_of(groups: Vec<IpGroup>, page: u32, limit: u32) -> Vec<IpGroup> {
    let start = (page.saturating_sub(1) as usize).saturating_mul(limit as usize);
    groups
        .into_iter()
        .skip(start)
        .take(limit as usize)
        .collect()
}
