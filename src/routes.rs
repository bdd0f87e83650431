//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /health`   - Health check: database, cache (public)
//! - `/api/*`        - Public storefront API (rate limited)
//! - `/api/admin/*`  - Admin API (Bearer token, stricter rate limit)
//! - `/media/*`      - Uploaded product media (static files)
//!
//! # Middleware
//!
//! - **Tracing** - structured request/response logging
//! - **Rate limiting** - per-IP token bucket; keyed by forwarded headers
//!   when `behind_proxy` is set
//! - **Authentication** - Bearer token on admin routes
//! - **Path normalization** - trailing slash handling

use std::path::PathBuf;

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{auth, rate_limit, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{middleware, Router};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `behind_proxy` - when `true`, rate limiting and client IP extraction
///   read `X-Forwarded-For` / `X-Real-IP` instead of the peer socket
///   address; enable only behind a trusted reverse proxy
/// - `media_root` - directory uploaded media is served from under `/media`
pub fn app_router(state: AppState, behind_proxy: bool, media_root: PathBuf) -> NormalizePath<Router> {
    let public_api = api::routes::public_routes();
    let public_api = if behind_proxy {
        public_api.layer(rate_limit::proxied_layer())
    } else {
        public_api.layer(rate_limit::layer())
    };

    let admin_api = api::routes::admin_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
    let admin_api = if behind_proxy {
        admin_api.layer(rate_limit::secure_proxied_layer())
    } else {
        admin_api.layer(rate_limit::secure_layer())
    };

    // Layers are applied per sub-router before merging, so the public
    // limiter never wraps the admin routes and vice versa.
    let api_router = public_api.nest("/admin", admin_api);

    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .nest_service("/media", ServeDir::new(media_root))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
