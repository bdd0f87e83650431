//! IP geolocation for recorded user actions.
//!
//! Provides a [`GeoResolver`] trait with two implementations:
//! - [`IpApiResolver`] - production lookup against ip-api.com
//! - [`NullResolver`] - no-op implementation for disabled lookups/testing

mod ip_api;
mod null_resolver;
mod resolver;

pub use ip_api::IpApiResolver;
pub use null_resolver::NullResolver;
pub use resolver::{is_private, GeoResolver};

#[cfg(test)]
pub use resolver::MockGeoResolver;
