//! Geolocation resolver trait.

use async_trait::async_trait;

/// Trait for resolving an IP address to a country name.
///
/// Resolution is strictly best-effort: implementations return `None` on any
/// lookup failure, timeout, or unresolvable address, and must never surface
/// an error. A failed lookup degrades a recorded action to `country = None`;
/// it never fails the write.
///
/// # Implementations
///
/// - [`crate::infrastructure::geo::IpApiResolver`] - ip-api.com backed lookup
/// - [`crate::infrastructure::geo::NullResolver`] - always `None` (lookups disabled)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GeoResolver: Send + Sync {
    /// Resolves `ip` to a country name, or `None` when unknown.
    async fn resolve(&self, ip: &str) -> Option<String>;
}

/// Whether `ip` belongs to a loopback or private range that can never be
/// geolocated. These are short-circuited without a network call.
///
/// Matches on string prefixes rather than parsed CIDR ranges: `172.*` is
/// deliberately wider than RFC 1918, mirroring how the deployment treats any
/// 172-prefixed client as non-routable.
pub fn is_private(ip: &str) -> bool {
    ip == "127.0.0.1"
        || ip == "::1"
        || ip.starts_with("192.168.")
        || ip.starts_with("10.")
        || ip.starts_with("172.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loopback_is_private() {
        assert!(is_private("127.0.0.1"));
        assert!(is_private("::1"));
    }

    #[test]
    fn test_private_ranges_by_prefix() {
        assert!(is_private("192.168.1.50"));
        assert!(is_private("10.0.0.1"));
        assert!(is_private("172.16.0.9"));
        assert!(is_private("172.99.0.1"));
    }

    #[test]
    fn test_public_addresses_are_not_private() {
        assert!(!is_private("1.1.1.1"));
        assert!(!is_private("8.8.8.8"));
        assert!(!is_private("203.0.113.7"));
    }
}
