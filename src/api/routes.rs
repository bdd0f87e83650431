//! API route configuration.
//!
//! Admin endpoints require Bearer token authentication via
//! [`crate::api::middleware::auth`]; public endpoints do not.

use crate::api::handlers::{
    create_product_handler, dashboard_handler, delete_product_handler, flat_actions_handler,
    get_product_handler, grouped_actions_handler, ip_handler, list_products_handler,
    stats_handler, track_action_handler, update_product_handler, upload_media_handler,
};
use crate::state::AppState;
use axum::extract::DefaultBodyLimit;
use axum::{
    routing::{get, post},
    Router,
};

/// Request body ceiling for media uploads. Individual part limits
/// (image/video) are enforced by the blob store.
const MEDIA_BODY_LIMIT: usize = 32 * 1024 * 1024;

/// Public storefront routes.
///
/// # Endpoints
///
/// - `GET  /ip`             - Client IP echo
/// - `GET  /products`       - Product listing (optional category filter)
/// - `GET  /products/{id}`  - Product detail
/// - `POST /actions`        - Track a checkout / buy-now action
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/ip", get(ip_handler))
        .route("/products", get(list_products_handler))
        .route("/products/{id}", get(get_product_handler))
        .route("/actions", post(track_action_handler))
}

/// Admin routes, protected by Bearer token authentication.
///
/// # Endpoints
///
/// - `GET    /dashboard`      - Catalog counts
/// - `GET    /stats`          - User-action summary (distinct-IP counters)
/// - `GET    /actions`        - IP-grouped, paginated action listing
/// - `GET    /actions/flat`   - Flat, paginated action listing
/// - `POST   /products`       - Create a product
/// - `PATCH  /products/{id}`  - Partially update a product
/// - `DELETE /products/{id}`  - Delete a product
/// - `POST   /media`          - Upload product media to the blob store
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(dashboard_handler))
        .route("/stats", get(stats_handler))
        .route("/actions", get(grouped_actions_handler))
        .route("/actions/flat", get(flat_actions_handler))
        .route("/products", post(create_product_handler))
        .route(
            "/products/{id}",
            axum::routing::patch(update_product_handler).delete(delete_product_handler),
        )
        .route(
            "/media",
            post(upload_media_handler).layer(DefaultBodyLimit::max(MEDIA_BODY_LIMIT)),
        )
}
