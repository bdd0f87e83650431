//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod ip;
pub mod media;
pub mod products;
pub mod records;
pub mod stats;
pub mod track;

pub use health::health_handler;
pub use ip::ip_handler;
pub use media::upload_media_handler;
pub use products::{
    create_product_handler, dashboard_handler, delete_product_handler, get_product_handler,
    list_products_handler, update_product_handler,
};
pub use records::{flat_actions_handler, grouped_actions_handler};
pub use stats::stats_handler;
pub use track::track_action_handler;
