//! Handlers for product catalog endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::api::dto::products::{
    CreateProductRequest, DashboardResponse, ProductListQuery, ProductResponse,
    UpdateProductRequest,
};
use crate::error::AppError;
use crate::state::AppState;

/// Lists catalog products, newest first.
///
/// # Endpoint
///
/// `GET /api/products`
///
/// # Query Parameters
///
/// - `category` (optional): `flowers`, `nonflower`, or `bulk`
pub async fn list_products_handler(
    State(state): State<AppState>,
    Query(query): Query<ProductListQuery>,
) -> Result<Json<Vec<ProductResponse>>, AppError> {
    let products = state.product_service.list_products(query.category).await?;

    Ok(Json(
        products.into_iter().map(ProductResponse::from).collect(),
    ))
}

/// Retrieves a single product.
///
/// # Endpoint
///
/// `GET /api/products/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if no product has that id.
pub async fn get_product_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ProductResponse>, AppError> {
    let product = state.product_service.get_product(id).await?;

    Ok(Json(ProductResponse::from(product)))
}

/// Creates a product.
///
/// # Endpoint
///
/// `POST /api/admin/products`
///
/// Media URLs must come from a prior `POST /api/admin/media` upload; this
/// endpoint accepts a typed JSON body only.
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails.
pub async fn create_product_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<ProductResponse>), AppError> {
    payload.validate()?;

    let product = state
        .product_service
        .create_product(payload.into_new_product())
        .await?;

    Ok((StatusCode::CREATED, Json(ProductResponse::from(product))))
}

/// Partially updates a product.
///
/// # Endpoint
///
/// `PATCH /api/admin/products/{id}`
///
/// # Request Body
///
/// All fields are optional. Only provided fields are changed;
/// `"video": null` clears the stored video.
///
/// # Errors
///
/// Returns 404 Not Found if no product has that id.
/// Returns 400 Bad Request if validation fails.
pub async fn update_product_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateProductRequest>,
) -> Result<Json<ProductResponse>, AppError> {
    payload.validate()?;

    let product = state
        .product_service
        .update_product(id, payload.into_patch())
        .await?;

    Ok(Json(ProductResponse::from(product)))
}

/// Deletes a product.
///
/// # Endpoint
///
/// `DELETE /api/admin/products/{id}`
///
/// Deletion does not touch the action log: records referencing the product
/// keep their `product_id`.
///
/// # Errors
///
/// Returns 404 Not Found if no product has that id.
pub async fn delete_product_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.product_service.delete_product(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Catalog counts for the admin dashboard.
///
/// # Endpoint
///
/// `GET /api/admin/dashboard`
pub async fn dashboard_handler(
    State(state): State<AppState>,
) -> Result<Json<DashboardResponse>, AppError> {
    let counts = state.product_service.dashboard_counts().await?;

    Ok(Json(DashboardResponse::from(counts)))
}
