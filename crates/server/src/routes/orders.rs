//! Order route handlers.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::extract::AppJson;
use crate::middleware::{RequireAdmin, RequireUser};
use crate::models::{Order, ShippingAddress};
use crate::services::OrderService;
use crate::state::AppState;

/// Checkout request body.
#[derive(Debug, Deserialize)]
pub struct PlaceOrderRequest {
    pub shipping: Option<ShippingAddress>,
}

/// Checkout response envelope.
#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub message: &'static str,
    pub order: Order,
}

/// Place an order from the caller's cart.
///
/// POST /api/order (user)
///
/// # Errors
///
/// 400 when shipping info is incomplete or the cart is empty, 401 without a
/// valid token.
pub async fn place(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    AppJson(req): AppJson<PlaceOrderRequest>,
) -> Result<Json<OrderResponse>> {
    // Absent shipping and all-empty shipping fail the same completeness check.
    let shipping = req.shipping.unwrap_or_default();

    let order = OrderService::new(state.store())
        .place_order(user.id, shipping)
        .await?;

    tracing::info!(order_id = %order.id, total = %order.total_amount, "Order placed");
    Ok(Json(OrderResponse {
        message: "Order placed",
        order,
    }))
}

/// List the caller's orders.
///
/// GET /api/orders (user)
///
/// # Errors
///
/// 401 without a valid token.
pub async fn index(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
) -> Result<Json<Vec<Order>>> {
    let orders = OrderService::new(state.store())
        .orders_for_user(user.id)
        .await?;
    Ok(Json(orders))
}

/// List every order.
///
/// GET /api/admin/orders (admin)
///
/// # Errors
///
/// 401/403 without admin authorization.
pub async fn admin_index(
    State(state): State<AppState>,
    _admin: RequireAdmin,
) -> Result<Json<Vec<Order>>> {
    let orders = OrderService::new(state.store()).all_orders().await?;
    Ok(Json(orders))
}
