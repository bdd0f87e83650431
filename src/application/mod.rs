//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository
//! calls, validation, and business rules. Services consume repository traits
//! and provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::recorder_service::RecorderService`] - user action recording
//! - [`services::analytics_service::AnalyticsService`] - action statistics and listings
//! - [`services::product_service::ProductService`] - catalog management
//! - [`services::auth_service::AdminAuth`] - admin token verification

pub mod services;
