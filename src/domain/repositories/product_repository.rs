//! Repository trait for the product catalog.

use crate::domain::entities::{Category, NewProduct, Product, ProductPatch};
use crate::error::AppError;
use async_trait::async_trait;

/// Per-category product counts for the admin dashboard.
#[derive(Debug, Clone, Default)]
pub struct CatalogCounts {
    pub total: i64,
    pub flowers: i64,
    pub nonflower: i64,
    pub bulk: i64,
}

/// Repository interface for product storage.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgProductRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Creates a product and returns it with its assigned id and timestamps.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_product: NewProduct) -> Result<Product, AppError>;

    /// Looks a product up by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, AppError>;

    /// Lists products newest-first, optionally filtered by category.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self, category: Option<Category>) -> Result<Vec<Product>, AppError>;

    /// Applies a partial update; `None` when no product has that id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, patch: ProductPatch) -> Result<Option<Product>, AppError>;

    /// Deletes a product; `false` when no product had that id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Total and per-category counts for the dashboard.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn counts(&self) -> Result<CatalogCounts, AppError>;
}
