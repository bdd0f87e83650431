//! DTOs for user action tracking.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{ActionKind, UserAction};

/// Request to track a checkout or buy-now action.
///
/// `ip_address` is optional; when absent the server derives the client IP
/// from the connection (or trusted proxy headers). Non-negativity of
/// `total_price` is enforced by the recorder service.
#[derive(Debug, Deserialize, Validate)]
pub struct TrackActionRequest {
    pub action: ActionKind,

    pub product_id: Option<i64>,

    #[serde(default = "default_quantity")]
    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: i32,

    pub total_price: Option<Decimal>,

    pub ip_address: Option<String>,
}

fn default_quantity() -> i32 {
    1
}

/// Acknowledgement returned after a tracked action is persisted.
#[derive(Debug, Serialize)]
pub struct TrackActionResponse {
    pub success: bool,
}

/// Individual action record as returned by admin endpoints.
///
/// Optional fields are omitted from JSON when `None` for cleaner responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionInfo {
    pub id: i64,
    pub action: ActionKind,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<i64>,

    pub quantity: i32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_price: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    pub created_at: DateTime<Utc>,
}

impl From<UserAction> for ActionInfo {
    fn from(action: UserAction) -> Self {
        Self {
            id: action.id,
            action: action.action,
            product_id: action.product_id,
            quantity: action.quantity,
            total_price: action.total_price,
            ip_address: action.ip_address,
            country: action.country,
            created_at: action.created_at,
        }
    }
}
