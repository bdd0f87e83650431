//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, cache setup, collaborator wiring, and Axum
//! server lifecycle.

use crate::application::services::{
    AdminAuth, AnalyticsService, ProductService, RecorderService,
};
use crate::config::Config;
use crate::infrastructure::blob::FsBlobStore;
use crate::infrastructure::cache::{CacheService, NullCache, RedisCache};
use crate::infrastructure::geo::{GeoResolver, IpApiResolver, NullResolver};
use crate::infrastructure::persistence::{PgActionRepository, PgProductRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::extract::Request;
use axum::ServiceExt;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool and migrations
/// - Redis stats cache (or NullCache fallback)
/// - geolocation resolver (or NullResolver when disabled)
/// - filesystem blob store for product media
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - database connection or migration fails
/// - the media root cannot be created
/// - server bind fails
/// - a server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to migrate")?;

    let cache: Arc<dyn CacheService> = if let Some(redis_url) = &config.redis_url {
        match RedisCache::connect(redis_url, config.cache_ttl_seconds).await {
            Ok(redis) => {
                tracing::info!("Stats cache enabled (Redis)");
                Arc::new(redis)
            }
            Err(e) => {
                tracing::warn!("Failed to connect to Redis: {}. Using NullCache.", e);
                Arc::new(NullCache::new())
            }
        }
    } else {
        tracing::info!("Stats cache disabled (NullCache)");
        Arc::new(NullCache::new())
    };

    let geolocator: Arc<dyn GeoResolver> = if config.geoip_enabled {
        Arc::new(IpApiResolver::with_base_url(
            config.geoip_timeout_secs,
            &config.geoip_base_url,
        )?)
    } else {
        Arc::new(NullResolver::new())
    };

    let blob_store = Arc::new(
        FsBlobStore::new(
            &config.media_root,
            &config.media_base_url,
            config.max_image_bytes,
            config.max_video_bytes,
        )
        .await
        .context("Failed to prepare media root")?,
    );

    let pool = Arc::new(pool);
    let product_repository = Arc::new(PgProductRepository::new(pool.clone()));
    let action_repository = Arc::new(PgActionRepository::new(pool.clone()));

    let state = AppState {
        product_service: Arc::new(ProductService::new(product_repository)),
        recorder_service: Arc::new(RecorderService::new(
            action_repository.clone(),
            geolocator,
        )),
        analytics_service: Arc::new(AnalyticsService::new(action_repository)),
        admin_auth: Arc::new(AdminAuth::new(&config.admin_token)),
        cache,
        blob_store,
        behind_proxy: config.behind_proxy,
    };

    let app = app_router(
        state,
        config.behind_proxy,
        PathBuf::from(&config.media_root),
    );

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .await?;

    Ok(())
}
