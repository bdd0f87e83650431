//! Repository trait for the user-action log.

use crate::domain::entities::{ActionKind, NewUserAction, UserAction};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Repository interface for the append-only user-action log.
///
/// Writes are insert-only; no method mutates or deletes existing records.
/// Every listing method returns records newest-first with equal timestamps
/// in insertion order (`created_at DESC, id ASC`), the order the grouping
/// functions in [`crate::domain::aggregation`] rely on.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgActionRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ActionRepository: Send + Sync {
    /// Appends one action record and returns it with its assigned `id` and
    /// `created_at`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the insert fails; nothing is
    /// partially persisted.
    async fn insert(&self, new_action: NewUserAction) -> Result<UserAction, AppError>;

    /// Reads the entire action log, newest-first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_all(&self) -> Result<Vec<UserAction>, AppError>;

    /// Reads the `limit` most recent records, newest-first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_recent(&self, limit: i64) -> Result<Vec<UserAction>, AppError>;

    /// Reads one page of raw records, newest-first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_page(&self, offset: i64, limit: i64) -> Result<Vec<UserAction>, AppError>;

    /// Counts all records in the log.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count_all(&self) -> Result<i64, AppError>;

    /// Counts distinct IP addresses among records of one action kind,
    /// optionally restricted to `created_at >= since`.
    ///
    /// Records without an IP count as exactly one distinct value (the
    /// `"unknown"` sentinel), not zero and not one-per-record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count_distinct_ips(
        &self,
        action: ActionKind,
        since: Option<DateTime<Utc>>,
    ) -> Result<i64, AppError>;
}
