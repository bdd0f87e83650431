#![allow(dead_code)]

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::net::SocketAddr;
use std::sync::Arc;
use storefront::application::services::{
    AdminAuth, AnalyticsService, ProductService, RecorderService,
};
use storefront::infrastructure::blob::FsBlobStore;
use storefront::infrastructure::cache::NullCache;
use storefront::infrastructure::geo::NullResolver;
use storefront::infrastructure::persistence::{PgActionRepository, PgProductRepository};
use storefront::state::AppState;

pub const ADMIN_TOKEN: &str = "test-admin-token";

/// Builds a real `AppState` over the test pool, with geolocation and the
/// stats cache disabled and media stored in a throwaway temp directory.
pub async fn create_test_state(pool: PgPool) -> AppState {
    let pool = Arc::new(pool);
    let product_repository = Arc::new(PgProductRepository::new(pool.clone()));
    let action_repository = Arc::new(PgActionRepository::new(pool.clone()));

    let media_root = std::env::temp_dir().join(format!("storefront-test-{}", uuid::Uuid::new_v4()));
    let blob_store = Arc::new(
        FsBlobStore::new(&media_root, "/media", 10 * 1024 * 1024, 20 * 1024 * 1024)
            .await
            .expect("temp media root"),
    );

    AppState {
        product_service: Arc::new(ProductService::new(product_repository)),
        recorder_service: Arc::new(RecorderService::new(
            action_repository.clone(),
            Arc::new(NullResolver::new()),
        )),
        analytics_service: Arc::new(AnalyticsService::new(action_repository)),
        admin_auth: Arc::new(AdminAuth::new(ADMIN_TOKEN)),
        cache: Arc::new(NullCache::new()),
        blob_store,
        behind_proxy: false,
    }
}

/// Inserts an action record with an explicit timestamp so tests control
/// ordering exactly.
pub async fn insert_action_at(
    pool: &PgPool,
    action: &str,
    ip: Option<&str>,
    country: Option<&str>,
    created_at: DateTime<Utc>,
) {
    sqlx::query(
        "INSERT INTO user_actions (action, ip_address, country, created_at) \
         VALUES ($1, $2, $3, $4)",
    )
    .bind(action)
    .bind(ip)
    .bind(country)
    .bind(created_at)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn insert_action(pool: &PgPool, action: &str, ip: Option<&str>) {
    sqlx::query("INSERT INTO user_actions (action, ip_address) VALUES ($1, $2)")
        .bind(action)
        .bind(ip)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn insert_product(pool: &PgPool, name: &str, category: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO products (name, category, price, rate, flavour, images) \
         VALUES ($1, $2, 19.99, 5, 'Citrus', ARRAY['/media/test.jpg']) \
         RETURNING id",
    )
    .bind(name)
    .bind(category)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Injects a fixed peer address so handlers using
/// `ConnectInfo<SocketAddr>` work under the test transport.
#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> tower::Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
        req.extensions_mut()
            .insert(axum::extract::ConnectInfo(addr));
        self.inner.call(req)
    }
}
