//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer and wraps
//! the external collaborators the application depends on.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL repository implementations
//! - [`geo`] - IP geolocation (ip-api.com and no-op implementations)
//! - [`blob`] - durable media storage for product images and videos
//! - [`cache`] - caching abstractions (Redis and no-op implementations)

pub mod blob;
pub mod cache;
pub mod geo;
pub mod persistence;
