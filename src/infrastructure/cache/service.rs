//! Cache service trait and error types.

use async_trait::async_trait;
use std::fmt;

/// Cache key for the serialized admin stats document.
pub const STATS_KEY: &str = "admin:stats";

/// Errors that can occur during cache operations.
#[derive(Debug)]
pub enum CacheError {
    ConnectionError(String),
    OperationError(String),
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::ConnectionError(e) => write!(f, "Cache connection error: {}", e),
            Self::OperationError(e) => write!(f, "Cache operation error: {}", e),
        }
    }
}

impl std::error::Error for CacheError {}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Trait for caching serialized read models (currently the admin stats
/// document).
///
/// Implementations must be thread-safe and handle errors gracefully without
/// disrupting the application: a cache failure degrades to recomputing the
/// view from the action log, never to a request failure. The recorder
/// invalidates [`STATS_KEY`] after every successful write, which is the
/// "stats are stale" signal for the dashboard.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache with TTL support
/// - [`crate::infrastructure::cache::NullCache`] - no-op implementation for disabled caching
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Retrieves a cached document.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(value))` on cache hit
    /// - `Ok(None)` on cache miss or error (fail-open behavior)
    async fn get(&self, key: &str) -> CacheResult<Option<String>>;

    /// Stores a document with optional TTL (implementation default if
    /// `None`).
    ///
    /// # Errors
    ///
    /// Should not propagate errors to callers. Implementations log errors
    /// and return `Ok(())` to avoid disrupting the request flow.
    async fn set(&self, key: &str, value: &str, ttl_seconds: Option<usize>) -> CacheResult<()>;

    /// Removes a cached document; used when the underlying data changes.
    ///
    /// # Errors
    ///
    /// Should not propagate errors to callers.
    async fn invalidate(&self, key: &str) -> CacheResult<()>;

    /// Whether the cache backend is healthy; reported by `/health`.
    async fn health_check(&self) -> bool;
}
