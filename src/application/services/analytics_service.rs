//! User action analytics service.

use std::sync::Arc;

use chrono::{DateTime, Duration, Local, NaiveTime, TimeZone, Utc};

use crate::domain::aggregation::{group_by_ip, page_count, page_of, IpGroup};
use crate::domain::entities::{ActionKind, UserAction};
use crate::domain::repositories::ActionRepository;
use crate::error::AppError;

/// How many of the newest records feed the dashboard's recent view.
const RECENT_WINDOW: i64 = 100;

/// How many IP groups the dashboard's recent view shows.
const RECENT_GROUP_LIMIT: usize = 20;

/// Dashboard summary over the whole action log.
///
/// The four counters are distinct-IP counts (a proxy for unique users), not
/// raw record counts: two checkouts from the same IP count once, and all
/// records without an IP together count once.
#[derive(Debug, Clone)]
pub struct StatsOverview {
    pub total_checkouts: i64,
    pub total_buy_nows: i64,
    pub today_checkouts: i64,
    pub today_buy_nows: i64,
    /// The newest [`RECENT_WINDOW`] records grouped by IP, top
    /// [`RECENT_GROUP_LIMIT`] groups by latest activity.
    pub recent_groups: Vec<IpGroup>,
}

/// One page of the IP-grouped listing.
#[derive(Debug, Clone)]
pub struct GroupedActionsPage {
    pub groups: Vec<IpGroup>,
    /// Raw record count across all groups, unaffected by pagination.
    pub total_count: i64,
    pub total_groups: usize,
    pub total_pages: u32,
    /// Echoed back exactly as requested, without clamping.
    pub current_page: u32,
}

/// One page of the flat (ungrouped) listing.
#[derive(Debug, Clone)]
pub struct FlatActionsPage {
    pub actions: Vec<UserAction>,
    pub total_count: i64,
    pub total_pages: u32,
    pub current_page: u32,
}

/// Read-side service over the user-action log.
///
/// Every operation is a pure function of the log at call time: stateless,
/// side-effect free, and safe to run concurrently with writes. The count
/// queries inside [`get_stats`](Self::get_stats) run concurrently without a
/// shared snapshot; skew between them on a growing log is accepted.
pub struct AnalyticsService<R: ActionRepository> {
    repository: Arc<R>,
}

impl<R: ActionRepository> AnalyticsService<R> {
    /// Creates a new analytics service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Computes the dashboard summary (distinct-IP counters plus the recent
    /// grouped view).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the log could not be read; no
    /// partial result is returned.
    pub async fn get_stats(&self) -> Result<StatsOverview, AppError> {
        let since = start_of_local_day(Local::now());

        let (total_checkouts, total_buy_nows, today_checkouts, today_buy_nows, recent) = tokio::try_join!(
            self.repository.count_distinct_ips(ActionKind::Checkout, None),
            self.repository.count_distinct_ips(ActionKind::BuyNow, None),
            self.repository
                .count_distinct_ips(ActionKind::Checkout, Some(since)),
            self.repository
                .count_distinct_ips(ActionKind::BuyNow, Some(since)),
            self.repository.list_recent(RECENT_WINDOW),
        )?;

        let mut recent_groups = group_by_ip(recent);
        recent_groups.truncate(RECENT_GROUP_LIMIT);

        Ok(StatsOverview {
            total_checkouts,
            total_buy_nows,
            today_checkouts,
            today_buy_nows,
            recent_groups,
        })
    }

    /// The canonical admin listing: the whole log grouped by IP, groups
    /// sorted by latest activity, paginated over groups.
    ///
    /// A `page` past the end yields an empty page, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the log could not be read.
    pub async fn list_grouped(&self, page: u32, limit: u32) -> Result<GroupedActionsPage, AppError> {
        let records = self.repository.list_all().await?;

        let total_count = records.len() as i64;
        let groups = group_by_ip(records);
        let total_groups = groups.len();
        let total_pages = page_count(total_groups, limit);
        let groups = page_of(groups, page, limit);

        Ok(GroupedActionsPage {
            groups,
            total_count,
            total_groups,
            total_pages,
            current_page: page,
        })
    }

    /// The flat listing: a straight newest-first slice of raw records.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the log could not be read.
    pub async fn list_flat(&self, page: u32, limit: u32) -> Result<FlatActionsPage, AppError> {
        let offset = i64::from(page.saturating_sub(1)) * i64::from(limit);

        let (actions, total_count) = tokio::try_join!(
            self.repository.list_page(offset, i64::from(limit)),
            self.repository.count_all(),
        )?;

        let total_pages = page_count(usize::try_from(total_count).unwrap_or(0), limit);

        Ok(FlatActionsPage {
            actions,
            total_count,
            total_pages,
            current_page: page,
        })
    }
}

/// The first instant of `now`'s calendar day in local time, as UTC.
///
/// This is the "today" boundary for the dashboard counters: a record created
/// exactly at local midnight counts as today, one a millisecond earlier does
/// not.
pub fn start_of_local_day(now: DateTime<Local>) -> DateTime<Utc> {
    let mut candidate = now.date_naive().and_time(NaiveTime::MIN);
    // A DST jump can make local midnight unrepresentable; advance to the
    // first representable hour of the day.
    loop {
        if let Some(dt) = Local.from_local_datetime(&candidate).earliest() {
            return dt.with_timezone(&Utc);
        }
        candidate += Duration::hours(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockActionRepository;
    use chrono::TimeZone;

    fn record(id: i64, ip: Option<&str>, action: ActionKind, at_secs: i64) -> UserAction {
        UserAction {
            id,
            action,
            product_id: None,
            quantity: 1,
            total_price: None,
            ip_address: ip.map(str::to_string),
            country: None,
            created_at: Utc.timestamp_opt(at_secs, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_get_stats_counts_distinct_ips() {
        let mut repo = MockActionRepository::new();

        repo.expect_count_distinct_ips()
            .withf(|action, since| *action == ActionKind::Checkout && since.is_none())
            .times(1)
            .returning(|_, _| Ok(1));
        repo.expect_count_distinct_ips()
            .withf(|action, since| *action == ActionKind::BuyNow && since.is_none())
            .times(1)
            .returning(|_, _| Ok(1));
        repo.expect_count_distinct_ips()
            .withf(|_, since| since.is_some())
            .times(2)
            .returning(|_, _| Ok(0));
        repo.expect_list_recent()
            .withf(|limit| *limit == 100)
            .times(1)
            .returning(|_| {
                Ok(vec![
                    record(2, Some("1.1.1.1"), ActionKind::Checkout, 20),
                    record(3, Some("2.2.2.2"), ActionKind::BuyNow, 15),
                    record(1, Some("1.1.1.1"), ActionKind::Checkout, 10),
                ])
            });

        let service = AnalyticsService::new(Arc::new(repo));
        let stats = service.get_stats().await.unwrap();

        assert_eq!(stats.total_checkouts, 1);
        assert_eq!(stats.total_buy_nows, 1);
        assert_eq!(stats.today_checkouts, 0);
        assert_eq!(stats.today_buy_nows, 0);
        assert_eq!(stats.recent_groups.len(), 2);
        assert_eq!(stats.recent_groups[0].ip_address, "1.1.1.1");
        assert_eq!(stats.recent_groups[0].action_count(), 2);
    }

    #[tokio::test]
    async fn test_get_stats_truncates_recent_groups() {
        let mut repo = MockActionRepository::new();

        repo.expect_count_distinct_ips().returning(|_, _| Ok(0));
        repo.expect_list_recent().returning(|_| {
            // 30 distinct IPs, newest-first.
            Ok((0..30)
                .map(|i| {
                    let ip = format!("10.1.0.{i}");
                    record(30 - i, Some(ip.as_str()), ActionKind::Checkout, 1_000 - i)
                })
                .collect())
        });

        let service = AnalyticsService::new(Arc::new(repo));
        let stats = service.get_stats().await.unwrap();

        assert_eq!(stats.recent_groups.len(), 20);
        assert_eq!(stats.recent_groups[0].ip_address, "10.1.0.0");
    }

    #[tokio::test]
    async fn test_list_grouped_example_scenario() {
        let mut repo = MockActionRepository::new();
        repo.expect_list_all().times(1).returning(|| {
            Ok(vec![
                record(2, Some("1.1.1.1"), ActionKind::Checkout, 20),
                record(3, Some("2.2.2.2"), ActionKind::BuyNow, 15),
                record(1, Some("1.1.1.1"), ActionKind::Checkout, 10),
            ])
        });

        let service = AnalyticsService::new(Arc::new(repo));
        let page = service.list_grouped(1, 10).await.unwrap();

        assert_eq!(page.total_count, 3);
        assert_eq!(page.total_groups, 2);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.current_page, 1);
        assert_eq!(page.groups[0].ip_address, "1.1.1.1");
        assert_eq!(page.groups[0].action_count(), 2);
        assert_eq!(page.groups[0].latest_action.timestamp(), 20);
        assert_eq!(page.groups[1].ip_address, "2.2.2.2");
        assert_eq!(page.groups[1].action_count(), 1);
    }

    #[tokio::test]
    async fn test_list_grouped_page_beyond_range_is_empty() {
        let mut repo = MockActionRepository::new();
        repo.expect_list_all()
            .returning(|| Ok(vec![record(1, Some("1.1.1.1"), ActionKind::Checkout, 10)]));

        let service = AnalyticsService::new(Arc::new(repo));
        let page = service.list_grouped(9, 10).await.unwrap();

        assert!(page.groups.is_empty());
        assert_eq!(page.total_groups, 1);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.current_page, 9);
    }

    #[tokio::test]
    async fn test_list_flat_translates_page_to_offset() {
        let mut repo = MockActionRepository::new();
        repo.expect_list_page()
            .withf(|offset, limit| *offset == 50 && *limit == 25)
            .times(1)
            .returning(|_, _| Ok(vec![]));
        repo.expect_count_all().times(1).returning(|| Ok(60));

        let service = AnalyticsService::new(Arc::new(repo));
        let page = service.list_flat(3, 25).await.unwrap();

        assert_eq!(page.total_count, 60);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.current_page, 3);
    }

    #[test]
    fn test_start_of_local_day_is_midnight() {
        let now = Local.with_ymd_and_hms(2026, 3, 5, 13, 45, 12).unwrap();
        let start = start_of_local_day(now);

        let midnight = Local.with_ymd_and_hms(2026, 3, 5, 0, 0, 0).unwrap();
        assert_eq!(start, midnight.with_timezone(&Utc));
    }

    #[test]
    fn test_today_boundary_is_inclusive_at_midnight() {
        let now = Local.with_ymd_and_hms(2026, 3, 5, 8, 0, 0).unwrap();
        let start = start_of_local_day(now);

        let at_midnight = Local
            .with_ymd_and_hms(2026, 3, 5, 0, 0, 0)
            .unwrap()
            .with_timezone(&Utc);
        let just_before = at_midnight - Duration::milliseconds(1);

        // `created_at >= start` admits midnight itself and nothing earlier.
        assert!(at_midnight >= start);
        assert!(just_before < start);
    }
}
