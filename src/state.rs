//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::{
    AdminAuth, AnalyticsService, ProductService, RecorderService,
};
use crate::infrastructure::blob::BlobStore;
use crate::infrastructure::cache::CacheService;
use crate::infrastructure::persistence::{PgActionRepository, PgProductRepository};

/// Dependency container cloned into every request.
///
/// Services are concrete over the Postgres repositories; the external
/// collaborators (cache, blob store, geolocation inside the recorder) stay
/// behind trait objects so deployments and tests can swap them.
#[derive(Clone)]
pub struct AppState {
    pub product_service: Arc<ProductService<PgProductRepository>>,
    pub recorder_service: Arc<RecorderService<PgActionRepository>>,
    pub analytics_service: Arc<AnalyticsService<PgActionRepository>>,
    pub admin_auth: Arc<AdminAuth>,
    pub cache: Arc<dyn CacheService>,
    pub blob_store: Arc<dyn BlobStore>,
    /// When true, client IPs are read from `X-Forwarded-For` / `X-Real-IP`.
    /// Enable only behind a trusted reverse proxy.
    pub behind_proxy: bool,
}
