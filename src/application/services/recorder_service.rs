//! User action recording service.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde_json::json;
use tracing::warn;

use crate::domain::aggregation::UNKNOWN_IP;
use crate::domain::entities::{ActionKind, NewUserAction, UserAction};
use crate::domain::repositories::ActionRepository;
use crate::error::AppError;
use crate::infrastructure::geo::GeoResolver;

/// Input for recording one user action.
#[derive(Debug, Clone)]
pub struct TrackAction {
    pub action: ActionKind,
    pub product_id: Option<i64>,
    pub quantity: i32,
    pub total_price: Option<Decimal>,
    pub ip_address: Option<String>,
}

/// Service that appends user actions to the log.
///
/// Each call resolves the client country once, at recording time; the stored
/// country is frozen and analytics reads never re-resolve it.
pub struct RecorderService<R: ActionRepository> {
    repository: Arc<R>,
    geolocator: Arc<dyn GeoResolver>,
}

impl<R: ActionRepository> RecorderService<R> {
    /// Creates a new recorder service.
    pub fn new(repository: Arc<R>, geolocator: Arc<dyn GeoResolver>) -> Self {
        Self {
            repository,
            geolocator,
        }
    }

    /// Records a checkout or buy-now action.
    ///
    /// The geolocation lookup is skipped when no usable IP is present, and a
    /// failed lookup degrades to `country = None`; the write still happens.
    /// Persistence is all-or-nothing: on a storage error the whole call
    /// fails and nothing is recorded.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `quantity` is not positive or
    /// `total_price` is negative.
    /// Returns [`AppError::Internal`] if the record could not be persisted.
    pub async fn record(&self, input: TrackAction) -> Result<UserAction, AppError> {
        if input.quantity < 1 {
            return Err(AppError::bad_request(
                "Quantity must be at least 1",
                json!({ "quantity": input.quantity }),
            ));
        }

        if input.total_price.is_some_and(|p| p.is_sign_negative()) {
            return Err(AppError::bad_request(
                "Total price must not be negative",
                json!({}),
            ));
        }

        let ip_address = input
            .ip_address
            .map(|ip| ip.trim().to_string())
            .filter(|ip| !ip.is_empty());

        let country = match ip_address.as_deref() {
            Some(ip) if ip != UNKNOWN_IP => self.geolocator.resolve(ip).await,
            _ => None,
        };

        let recorded = self
            .repository
            .insert(NewUserAction {
                action: input.action,
                product_id: input.product_id,
                quantity: input.quantity,
                total_price: input.total_price,
                ip_address,
                country,
            })
            .await
            .map_err(|e| {
                warn!(error = %e, action = %input.action, "Failed to record user action");
                AppError::internal("Failed to record user action", json!({}))
            })?;

        metrics::counter!("user_actions_recorded_total", "action" => recorded.action.as_str())
            .increment(1);

        Ok(recorded)
    }
}
