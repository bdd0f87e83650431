//! Business logic services for the application layer.

pub mod analytics_service;
pub mod auth_service;
pub mod product_service;
pub mod recorder_service;

pub use analytics_service::{
    AnalyticsService, FlatActionsPage, GroupedActionsPage, StatsOverview,
};
pub use auth_service::AdminAuth;
pub use product_service::ProductService;
pub use recorder_service::{RecorderService, TrackAction};
