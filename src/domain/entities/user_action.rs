//! User action entity representing a single checkout or buy-now event.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

use crate::domain::aggregation::UNKNOWN_IP;

/// The kind of storefront action being tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Checkout,
    BuyNow,
}

impl ActionKind {
    /// Database representation (`user_actions.action` column).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Checkout => "checkout",
            Self::BuyNow => "buy_now",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "checkout" => Ok(Self::Checkout),
            "buy_now" => Ok(Self::BuyNow),
            other => Err(format!("unknown action kind '{other}'")),
        }
    }
}

/// One immutable log entry for a checkout or buy-now event.
///
/// Records are append-only: nothing in the system mutates or deletes them
/// after creation. `country` is resolved once when the record is created and
/// frozen thereafter; analytics reads never re-resolve it.
#[derive(Debug, Clone)]
pub struct UserAction {
    pub id: i64,
    pub action: ActionKind,
    /// Loose reference; the product is not required to exist for aggregation.
    pub product_id: Option<i64>,
    pub quantity: i32,
    pub total_price: Option<Decimal>,
    pub ip_address: Option<String>,
    pub country: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl UserAction {
    /// The key this record groups under in per-IP analytics views.
    ///
    /// Absent IPs all fall into the single `"unknown"` bucket.
    pub fn group_key(&self) -> &str {
        self.ip_address.as_deref().unwrap_or(UNKNOWN_IP)
    }
}

/// Input data for recording a new user action.
///
/// `id` and `created_at` are assigned by the database; `country` must already
/// be resolved (or `None`) by the time the record is persisted.
#[derive(Debug, Clone)]
pub struct NewUserAction {
    pub action: ActionKind,
    pub product_id: Option<i64>,
    pub quantity: i32,
    pub total_price: Option<Decimal>,
    pub ip_address: Option<String>,
    pub country: Option<String>,
}
