//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx.
//! Queries use the runtime `query_as` API with explicit row structs mapped
//! into domain entities.
//!
//! # Repositories
//!
//! - [`PgActionRepository`] - user-action log and its aggregates
//! - [`PgProductRepository`] - product catalog storage

pub mod pg_action_repository;
pub mod pg_product_repository;

pub use pg_action_repository::PgActionRepository;
pub use pg_product_repository::PgProductRepository;
