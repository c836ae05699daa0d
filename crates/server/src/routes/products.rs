//! Product route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Deserializer, Serialize};

use boutique_core::ProductId;

use crate::error::{AppError, Result};
use crate::extract::AppJson;
use crate::middleware::RequireAdmin;
use crate::models::Product;
use crate::services::{CatalogService, NewProduct, ProductFilter, ProductPatch, SortOrder};
use crate::state::AppState;

/// Catalog listing query parameters.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub q: Option<String>,
    pub category: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub sort_by: Option<String>,
}

/// Create request. Required fields are validated in the handler so a missing
/// field gets the documented 400 message rather than a deserialize rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub category: Option<String>,
    pub color: Option<String>,
    pub desc: Option<String>,
    pub images: Option<Vec<String>>,
    #[serde(default, deserialize_with = "stock_field")]
    pub stock: Option<u32>,
}

/// Update request: any subset of product fields.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub category: Option<String>,
    pub color: Option<String>,
    pub desc: Option<String>,
    pub images: Option<Vec<String>>,
    #[serde(default, deserialize_with = "stock_field")]
    pub stock: Option<u32>,
}

/// Mutation response envelope.
#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub message: &'static str,
    pub product: Product,
}

/// Bare acknowledgement envelope.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Stock arrives as a JSON number or a numeric string; coerce to a count.
fn stock_field<'de, D>(deserializer: D) -> std::result::Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Decimal>::deserialize(deserializer)?;
    value
        .map(|d| {
            d.to_u32()
                .ok_or_else(|| serde::de::Error::custom("stock must be a non-negative integer"))
        })
        .transpose()
}

/// List products matching the query.
///
/// GET /api/products
///
/// # Errors
///
/// 500 if the store cannot be read.
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Product>>> {
    let filter = ProductFilter {
        q: query.q,
        category: query.category,
        min_price: query.min_price,
        max_price: query.max_price,
        sort: query.sort_by.as_deref().and_then(SortOrder::parse),
    };
    let list = CatalogService::new(state.store()).list(&filter).await?;
    Ok(Json(list))
}

/// Get one product.
///
/// GET /api/products/{id}
///
/// # Errors
///
/// 404 when the product does not exist.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<Product>> {
    let product = CatalogService::new(state.store()).get(id).await?;
    Ok(Json(product))
}

/// Create a product.
///
/// POST /api/products (admin)
///
/// # Errors
///
/// 400 when name or price is missing, 401/403 without admin authorization.
pub async fn create(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    AppJson(req): AppJson<CreateProductRequest>,
) -> Result<Json<ProductResponse>> {
    let (Some(name), Some(price)) = (req.name, req.price) else {
        return Err(AppError::Validation("name & price required".to_string()));
    };
    if name.is_empty() {
        return Err(AppError::Validation("name & price required".to_string()));
    }

    let product = CatalogService::new(state.store())
        .create(NewProduct {
            name,
            price,
            category: req.category,
            color: req.color,
            desc: req.desc,
            images: req.images,
            stock: req.stock,
        })
        .await?;

    tracing::info!(product_id = %product.id, "Product created");
    Ok(Json(ProductResponse {
        message: "Product added",
        product,
    }))
}

/// Update a product.
///
/// PUT /api/products/{id} (admin)
///
/// # Errors
///
/// 404 when the product does not exist, 401/403 without admin authorization.
pub async fn update(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(id): Path<ProductId>,
    AppJson(req): AppJson<UpdateProductRequest>,
) -> Result<Json<ProductResponse>> {
    let product = CatalogService::new(state.store())
        .update(
            id,
            ProductPatch {
                name: req.name,
                price: req.price,
                category: req.category,
                color: req.color,
                desc: req.desc,
                images: req.images,
                stock: req.stock,
            },
        )
        .await?;

    Ok(Json(ProductResponse {
        message: "Updated",
        product,
    }))
}

/// Delete a product. Idempotent.
///
/// DELETE /api/products/{id} (admin)
///
/// # Errors
///
/// 401/403 without admin authorization.
pub async fn destroy(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(id): Path<ProductId>,
) -> Result<Json<MessageResponse>> {
    CatalogService::new(state.store()).delete(id).await?;
    Ok(Json(MessageResponse { message: "Deleted" }))
}
