//! Cart domain types.

use serde::{Deserialize, Serialize};

use boutique_core::{ProductId, UserId};

use super::Product;

/// A user's cart: at most one live record per user.
///
/// Deleted wholesale when an order is placed from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Owning user.
    pub user_id: UserId,
    /// Ordered line items.
    pub items: Vec<CartItem>,
}

impl Cart {
    /// An empty cart for the given user.
    #[must_use]
    pub const fn empty(user_id: UserId) -> Self {
        Self {
            user_id,
            items: Vec::new(),
        }
    }
}

/// One cart line: a product reference and a quantity, always >= 1.
///
/// The product reference may dangle (the product can be deleted later);
/// dangling lines are resolved lazily at read time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: ProductId,
    pub qty: u32,
}

/// A cart joined against the live catalog, as returned to clients.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub user_id: UserId,
    pub items: Vec<CartLine>,
}

/// One joined cart line. `product` is `None` when the referenced product no
/// longer exists.
#[derive(Debug, Clone, Serialize)]
pub struct CartLine {
    pub product: Option<Product>,
    pub qty: u32,
}
