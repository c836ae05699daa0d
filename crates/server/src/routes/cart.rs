//! Cart route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};

use boutique_core::ProductId;

use crate::error::{AppError, Result};
use crate::extract::AppJson;
use crate::middleware::RequireUser;
use crate::models::{Cart, CartView};
use crate::services::CartService;
use crate::state::AppState;

/// Add-to-cart request body. `qty` stays raw JSON so non-numeric input can
/// fall back to 1 instead of rejecting the request.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub product_id: Option<ProductId>,
    pub qty: Option<serde_json::Value>,
}

/// Cart mutation response envelope.
#[derive(Debug, Serialize)]
pub struct CartResponse {
    pub message: &'static str,
    pub cart: Cart,
}

/// Add a product to the caller's cart.
///
/// POST /api/cart (user)
///
/// # Errors
///
/// 400 when productId is missing, 401 without a valid token.
pub async fn add(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    AppJson(req): AppJson<AddToCartRequest>,
) -> Result<Json<CartResponse>> {
    let Some(product_id) = req.product_id else {
        return Err(AppError::Validation("productId required".to_string()));
    };
    let qty = CartService::sanitize_qty(req.qty.as_ref());

    let cart = CartService::new(state.store())
        .add_item(user.id, product_id, qty)
        .await?;

    Ok(Json(CartResponse {
        message: "Added to cart",
        cart,
    }))
}

/// Get the caller's cart joined with current product data.
///
/// GET /api/cart (user)
///
/// # Errors
///
/// 401 without a valid token.
pub async fn show(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
) -> Result<Json<CartView>> {
    let view = CartService::new(state.store()).get_cart(user.id).await?;
    Ok(Json(view))
}

/// Remove a product line from the caller's cart. No-op when absent.
///
/// DELETE /api/cart/{productId} (user)
///
/// # Errors
///
/// 401 without a valid token.
pub async fn remove(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path(product_id): Path<ProductId>,
) -> Result<Json<CartResponse>> {
    let cart = CartService::new(state.store())
        .remove_item(user.id, product_id)
        .await?;

    Ok(Json(CartResponse {
        message: "Removed",
        cart,
    }))
}
