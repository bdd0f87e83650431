//! PostgreSQL implementation of the product repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Category, NewProduct, Product, ProductPatch};
use crate::domain::repositories::{CatalogCounts, ProductRepository};
use crate::error::AppError;

/// A row from the `products` table.
#[derive(Debug, Clone, sqlx::FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    category: String,
    price: Decimal,
    rate: i32,
    flavour: String,
    images: Vec<String>,
    video: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ProductRow {
    fn into_entity(self) -> Result<Product, AppError> {
        let category = self.category.parse::<Category>().map_err(|e| {
            AppError::internal("Corrupt product record", serde_json::json!({ "reason": e }))
        })?;

        Ok(Product {
            id: self.id,
            name: self.name,
            category,
            price: self.price,
            rate: self.rate,
            flavour: self.flavour,
            images: self.images,
            video: self.video,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// PostgreSQL repository for product storage and retrieval.
pub struct PgProductRepository {
    pool: Arc<PgPool>,
}

impl PgProductRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn create(&self, new_product: NewProduct) -> Result<Product, AppError> {
        let row = sqlx::query_as::<_, ProductRow>(
            "INSERT INTO products (name, category, price, rate, flavour, images, video) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING id, name, category, price, rate, flavour, images, video, \
                       created_at, updated_at",
        )
        .bind(&new_product.name)
        .bind(new_product.category.as_str())
        .bind(new_product.price)
        .bind(new_product.rate)
        .bind(&new_product.flavour)
        .bind(&new_product.images)
        .bind(&new_product.video)
        .fetch_one(self.pool.as_ref())
        .await?;

        row.into_entity()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, AppError> {
        let row = sqlx::query_as::<_, ProductRow>(
            "SELECT id, name, category, price, rate, flavour, images, video, \
                    created_at, updated_at \
             FROM products \
             WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(ProductRow::into_entity).transpose()
    }

    async fn list(&self, category: Option<Category>) -> Result<Vec<Product>, AppError> {
        let rows = sqlx::query_as::<_, ProductRow>(
            "SELECT id, name, category, price, rate, flavour, images, video, \
                    created_at, updated_at \
             FROM products \
             WHERE ($1::text IS NULL OR category = $1) \
             ORDER BY created_at DESC, id ASC",
        )
        .bind(category.map(|c| c.as_str()))
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.into_iter().map(ProductRow::into_entity).collect()
    }

    async fn update(&self, id: i64, patch: ProductPatch) -> Result<Option<Product>, AppError> {
        // `video` needs clear-vs-keep semantics, so the update distinguishes
        // "leave as is" ($8 = false) from "set to $9 (possibly NULL)".
        let (replace_video, video) = match patch.video {
            Some(video) => (true, video),
            None => (false, None),
        };

        let row = sqlx::query_as::<_, ProductRow>(
            "UPDATE products SET \
                 name       = COALESCE($2, name), \
                 category   = COALESCE($3, category), \
                 price      = COALESCE($4, price), \
                 rate       = COALESCE($5, rate), \
                 flavour    = COALESCE($6, flavour), \
                 images     = COALESCE($7, images), \
                 video      = CASE WHEN $8 THEN $9 ELSE video END, \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING id, name, category, price, rate, flavour, images, video, \
                       created_at, updated_at",
        )
        .bind(id)
        .bind(&patch.name)
        .bind(patch.category.map(|c| c.as_str()))
        .bind(patch.price)
        .bind(patch.rate)
        .bind(&patch.flavour)
        .bind(&patch.images)
        .bind(replace_video)
        .bind(&video)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(ProductRow::into_entity).transpose()
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn counts(&self) -> Result<CatalogCounts, AppError> {
        let row: (i64, i64, i64, i64) = sqlx::query_as(
            "SELECT \
                 COUNT(*), \
                 COUNT(*) FILTER (WHERE category = 'flowers'), \
                 COUNT(*) FILTER (WHERE category = 'nonflower'), \
                 COUNT(*) FILTER (WHERE category = 'bulk') \
             FROM products",
        )
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(CatalogCounts {
            total: row.0,
            flowers: row.1,
            nonflower: row.2,
            bulk: row.3,
        })
    }
}
