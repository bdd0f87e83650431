//! No-op geolocation resolver for disabled lookups.

use async_trait::async_trait;
use tracing::debug;

use super::resolver::GeoResolver;

/// A resolver that never resolves anything.
///
/// Used when geolocation is disabled by configuration and in tests; recorded
/// actions simply carry `country = None`.
pub struct NullResolver;

impl NullResolver {
    /// Creates a new NullResolver instance.
    pub fn new() -> Self {
        debug!("Using NullResolver (geolocation disabled)");
        Self
    }
}

impl Default for NullResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GeoResolver for NullResolver {
    async fn resolve(&self, _ip: &str) -> Option<String> {
        None
    }
}
