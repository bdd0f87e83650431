//! PostgreSQL implementation of the action log repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{ActionKind, NewUserAction, UserAction};
use crate::domain::repositories::ActionRepository;
use crate::error::AppError;

/// A row from the `user_actions` table.
///
/// `action` is kept as TEXT in the schema and parsed into [`ActionKind`]
/// when mapped; an unparseable value means the table was written outside
/// this application and is surfaced as an internal error.
#[derive(Debug, Clone, sqlx::FromRow)]
struct ActionRow {
    id: i64,
    action: String,
    product_id: Option<i64>,
    quantity: i32,
    total_price: Option<Decimal>,
    ip_address: Option<String>,
    country: Option<String>,
    created_at: DateTime<Utc>,
}

impl ActionRow {
    fn into_entity(self) -> Result<UserAction, AppError> {
        let action = self.action.parse::<ActionKind>().map_err(|e| {
            AppError::internal("Corrupt action record", serde_json::json!({ "reason": e }))
        })?;

        Ok(UserAction {
            id: self.id,
            action,
            product_id: self.product_id,
            quantity: self.quantity,
            total_price: self.total_price,
            ip_address: self.ip_address,
            country: self.country,
            created_at: self.created_at,
        })
    }
}

/// PostgreSQL repository for the append-only user-action log.
///
/// All listing queries order by `created_at DESC, id ASC` so that equal
/// timestamps come back in insertion order, which the grouping code relies
/// on for stable tie-breaks.
pub struct PgActionRepository {
    pool: Arc<PgPool>,
}

impl PgActionRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ActionRepository for PgActionRepository {
    async fn insert(&self, new_action: NewUserAction) -> Result<UserAction, AppError> {
        let row = sqlx::query_as::<_, ActionRow>(
            "INSERT INTO user_actions \
                 (action, product_id, quantity, total_price, ip_address, country) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING id, action, product_id, quantity, total_price, ip_address, country, created_at",
        )
        .bind(new_action.action.as_str())
        .bind(new_action.product_id)
        .bind(new_action.quantity)
        .bind(new_action.total_price)
        .bind(&new_action.ip_address)
        .bind(&new_action.country)
        .fetch_one(self.pool.as_ref())
        .await?;

        row.into_entity()
    }

    async fn list_all(&self) -> Result<Vec<UserAction>, AppError> {
        let rows = sqlx::query_as::<_, ActionRow>(
            "SELECT id, action, product_id, quantity, total_price, ip_address, country, created_at \
             FROM user_actions \
             ORDER BY created_at DESC, id ASC",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.into_iter().map(ActionRow::into_entity).collect()
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<UserAction>, AppError> {
        let rows = sqlx::query_as::<_, ActionRow>(
            "SELECT id, action, product_id, quantity, total_price, ip_address, country, created_at \
             FROM user_actions \
             ORDER BY created_at DESC, id ASC \
             LIMIT $1",
        )
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.into_iter().map(ActionRow::into_entity).collect()
    }

    async fn list_page(&self, offset: i64, limit: i64) -> Result<Vec<UserAction>, AppError> {
        let rows = sqlx::query_as::<_, ActionRow>(
            "SELECT id, action, product_id, quantity, total_price, ip_address, country, created_at \
             FROM user_actions \
             ORDER BY created_at DESC, id ASC \
             LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.into_iter().map(ActionRow::into_entity).collect()
    }

    async fn count_all(&self) -> Result<i64, AppError> {
        let count: Option<i64> = sqlx::query_scalar("SELECT COUNT(*) FROM user_actions")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count.unwrap_or(0))
    }

    async fn count_distinct_ips(
        &self,
        action: ActionKind,
        since: Option<DateTime<Utc>>,
    ) -> Result<i64, AppError> {
        // COUNT(DISTINCT ip_address) would skip NULLs entirely; coalescing to
        // the sentinel makes all missing IPs count as exactly one value.
        let count: Option<i64> = sqlx::query_scalar(
            "SELECT COUNT(DISTINCT COALESCE(ip_address, 'unknown')) \
             FROM user_actions \
             WHERE action = $1 \
               AND ($2::timestamptz IS NULL OR created_at >= $2)",
        )
        .bind(action.as_str())
        .bind(since)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(count.unwrap_or(0))
    }
}
