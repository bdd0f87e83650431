//! DTOs for product catalog endpoints.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Category, NewProduct, Product, ProductPatch};
use crate::domain::repositories::CatalogCounts;

/// Query parameters for the public product listing.
#[derive(Debug, Deserialize)]
pub struct ProductListQuery {
    pub category: Option<Category>,
}

/// Request to create a product.
///
/// Media must already be uploaded through `POST /api/admin/media`; this
/// request carries the returned URLs. Price positivity is enforced by the
/// product service.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,

    pub category: Category,

    pub price: Decimal,

    #[validate(range(min = 0, max = 10, message = "Rate must be between 0 and 10"))]
    pub rate: i32,

    #[validate(length(min = 1, max = 100))]
    pub flavour: String,

    #[validate(length(min = 1, message = "At least one image is required"))]
    pub images: Vec<String>,

    pub video: Option<String>,
}

impl CreateProductRequest {
    pub fn into_new_product(self) -> NewProduct {
        NewProduct {
            name: self.name,
            category: self.category,
            price: self.price,
            rate: self.rate,
            flavour: self.flavour,
            images: self.images,
            video: self.video,
        }
    }
}

/// Partial product update.
///
/// All fields are optional; only provided fields change. For `video`,
/// `null` clears the stored URL while an omitted field leaves it unchanged.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProductRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,

    pub category: Option<Category>,

    pub price: Option<Decimal>,

    #[validate(range(min = 0, max = 10, message = "Rate must be between 0 and 10"))]
    pub rate: Option<i32>,

    #[validate(length(min = 1, max = 100))]
    pub flavour: Option<String>,

    #[validate(length(min = 1, message = "At least one image is required"))]
    pub images: Option<Vec<String>>,

    #[serde(default, with = "serde_with::rust::double_option")]
    pub video: Option<Option<String>>,
}

impl UpdateProductRequest {
    pub fn into_patch(self) -> ProductPatch {
        ProductPatch {
            name: self.name,
            category: self.category,
            price: self.price,
            rate: self.rate,
            flavour: self.flavour,
            images: self.images,
            video: self.video,
        }
    }
}

/// JSON representation of a product.
#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub category: Category,
    pub price: Decimal,
    pub rate: i32,
    pub flavour: String,
    pub images: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            category: product.category,
            price: product.price,
            rate: product.rate,
            flavour: product.flavour,
            images: product.images,
            video: product.video,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

/// Catalog counts for the admin dashboard.
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub total_products: i64,
    pub total_flowers: i64,
    pub total_nonflower: i64,
    pub total_bulk: i64,
}

impl From<CatalogCounts> for DashboardResponse {
    fn from(counts: CatalogCounts) -> Self {
        Self {
            total_products: counts.total,
            total_flowers: counts.flowers,
            total_nonflower: counts.nonflower,
            total_bulk: counts.bulk,
        }
    }
}
