//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; concrete implementations
//! live in `crate::infrastructure::persistence`, and mock implementations are
//! auto-generated via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`ActionRepository`] - append-only user-action log and its aggregates
//! - [`ProductRepository`] - product catalog CRUD
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod action_repository;
pub mod product_repository;

pub use action_repository::ActionRepository;
pub use product_repository::{CatalogCounts, ProductRepository};

#[cfg(test)]
pub use action_repository::MockActionRepository;
#[cfg(test)]
pub use product_repository::MockProductRepository;
