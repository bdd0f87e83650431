//! Product catalog service.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde_json::json;

use crate::domain::entities::{Category, NewProduct, Product, ProductPatch};
use crate::domain::repositories::{CatalogCounts, ProductRepository};
use crate::error::AppError;

/// Highest allowed product rating.
const MAX_RATE: i32 = 10;

/// Service for managing catalog products.
///
/// Handles product CRUD with validation:
/// - price strictly positive
/// - rating within 0..=10
/// - at least one image URL
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Creates a new product service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a new product.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if validation fails.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_product(&self, new_product: NewProduct) -> Result<Product, AppError> {
        if new_product.name.trim().is_empty() {
            return Err(AppError::bad_request("Name must not be empty", json!({})));
        }
        Self::validate_price(new_product.price)?;
        Self::validate_rate(new_product.rate)?;
        Self::validate_images(&new_product.images)?;

        self.repository.create(new_product).await
    }

    /// Retrieves a product by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no product has that id.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_product(&self, id: i64) -> Result<Product, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Product not found", json!({ "id": id })))
    }

    /// Lists products newest-first, optionally filtered by category.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_products(&self, category: Option<Category>) -> Result<Vec<Product>, AppError> {
        self.repository.list(category).await
    }

    /// Applies a partial update to a product.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a changed field fails validation.
    /// Returns [`AppError::NotFound`] if no product has that id.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_product(&self, id: i64, patch: ProductPatch) -> Result<Product, AppError> {
        if let Some(name) = &patch.name {
            if name.trim().is_empty() {
                return Err(AppError::bad_request("Name must not be empty", json!({})));
            }
        }
        if let Some(price) = patch.price {
            Self::validate_price(price)?;
        }
        if let Some(rate) = patch.rate {
            Self::validate_rate(rate)?;
        }
        if let Some(images) = &patch.images {
            Self::validate_images(images)?;
        }

        self.repository
            .update(id, patch)
            .await?
            .ok_or_else(|| AppError::not_found("Product not found", json!({ "id": id })))
    }

    /// Deletes a product.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no product has that id.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_product(&self, id: i64) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(AppError::not_found(
                "Product not found",
                json!({ "id": id }),
            ));
        }
        Ok(())
    }

    /// Total and per-category counts for the admin dashboard.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn dashboard_counts(&self) -> Result<CatalogCounts, AppError> {
        self.repository.counts().await
    }

    fn validate_price(price: Decimal) -> Result<(), AppError> {
        if price <= Decimal::ZERO {
            return Err(AppError::bad_request(
                "Price must be greater than zero",
                json!({ "price": price.to_string() }),
            ));
        }
        Ok(())
    }

    fn validate_rate(rate: i32) -> Result<(), AppError> {
        if !(0..=MAX_RATE).contains(&rate) {
            return Err(AppError::bad_request(
                format!("Rate must be between 0 and {MAX_RATE}"),
                json!({ "rate": rate }),
            ));
        }
        Ok(())
    }

    fn validate_images(images: &[String]) -> Result<(), AppError> {
        if images.is_empty() {
            return Err(AppError::bad_request(
                "At least one image is required",
                json!({}),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockProductRepository;
    use chrono::Utc;

    fn new_product() -> NewProduct {
        NewProduct {
            name: "Blue Dream".to_string(),
            category: Category::Flowers,
            price: Decimal::new(2500, 2),
            rate: 8,
            flavour: "Berry".to_string(),
            images: vec!["/media/blue-dream.jpg".to_string()],
            video: None,
        }
    }

    fn stored(new_product: &NewProduct) -> Product {
        Product {
            id: 1,
            name: new_product.name.clone(),
            category: new_product.category,
            price: new_product.price,
            rate: new_product.rate,
            flavour: new_product.flavour.clone(),
            images: new_product.images.clone(),
            video: new_product.video.clone(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_product_success() {
        let mut repo = MockProductRepository::new();
        repo.expect_create()
            .times(1)
            .returning(|n| Ok(stored(&n)));

        let service = ProductService::new(Arc::new(repo));
        let product = service.create_product(new_product()).await.unwrap();

        assert_eq!(product.name, "Blue Dream");
        assert_eq!(product.category, Category::Flowers);
    }

    #[tokio::test]
    async fn test_create_rejects_non_positive_price() {
        let mut repo = MockProductRepository::new();
        repo.expect_create().times(0);

        let service = ProductService::new(Arc::new(repo));
        let mut input = new_product();
        input.price = Decimal::ZERO;

        assert!(matches!(
            service.create_product(input).await.unwrap_err(),
            AppError::Validation { .. }
        ));
    }

    #[tokio::test]
    async fn test_create_rejects_out_of_range_rate() {
        let mut repo = MockProductRepository::new();
        repo.expect_create().times(0);

        let service = ProductService::new(Arc::new(repo));
        let mut input = new_product();
        input.rate = 11;

        assert!(service.create_product(input).await.is_err());
    }

    #[tokio::test]
    async fn test_create_requires_an_image() {
        let mut repo = MockProductRepository::new();
        repo.expect_create().times(0);

        let service = ProductService::new(Arc::new(repo));
        let mut input = new_product();
        input.images.clear();

        assert!(service.create_product(input).await.is_err());
    }

    #[tokio::test]
    async fn test_get_product_not_found() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_by_id().times(1).returning(|_| Ok(None));

        let service = ProductService::new(Arc::new(repo));

        assert!(matches!(
            service.get_product(99).await.unwrap_err(),
            AppError::NotFound { .. }
        ));
    }

    #[tokio::test]
    async fn test_update_patches_only_changed_fields() {
        let mut repo = MockProductRepository::new();
        repo.expect_update()
            .withf(|id, patch| *id == 1 && patch.price == Some(Decimal::new(3000, 2)))
            .times(1)
            .returning(|_, patch| {
                let mut product = stored(&new_product());
                if let Some(price) = patch.price {
                    product.price = price;
                }
                Ok(Some(product))
            });

        let service = ProductService::new(Arc::new(repo));
        let patch = ProductPatch {
            price: Some(Decimal::new(3000, 2)),
            ..Default::default()
        };
        let product = service.update_product(1, patch).await.unwrap();

        assert_eq!(product.price, Decimal::new(3000, 2));
    }

    #[tokio::test]
    async fn test_update_missing_product_is_not_found() {
        let mut repo = MockProductRepository::new();
        repo.expect_update().times(1).returning(|_, _| Ok(None));

        let service = ProductService::new(Arc::new(repo));

        assert!(matches!(
            service.update_product(7, ProductPatch::default()).await.unwrap_err(),
            AppError::NotFound { .. }
        ));
    }

    #[tokio::test]
    async fn test_delete_missing_product_is_not_found() {
        let mut repo = MockProductRepository::new();
        repo.expect_delete().times(1).returning(|_| Ok(false));

        let service = ProductService::new(Arc::new(repo));

        assert!(matches!(
            service.delete_product(7).await.unwrap_err(),
            AppError::NotFound { .. }
        ));
    }

    #[tokio::test]
    async fn test_dashboard_counts_pass_through() {
        let mut repo = MockProductRepository::new();
        repo.expect_counts().times(1).returning(|| {
            Ok(CatalogCounts {
                total: 12,
                flowers: 6,
                nonflower: 4,
                bulk: 2,
            })
        });

        let service = ProductService::new(Arc::new(repo));
        let counts = service.dashboard_counts().await.unwrap();

        assert_eq!(counts.total, 12);
        assert_eq!(counts.bulk, 2);
    }
}
