//! Order service.

use chrono::Utc;
use rust_decimal::Decimal;

use boutique_core::{OrderId, OrderStatus, PaymentMode, UserId};

use crate::error::AppError;
use crate::models::{Order, OrderLine, ShippingAddress};
use crate::store::DocumentStore;

/// Order service: cart-to-order conversion and order listings.
pub struct OrderService<'a> {
    store: &'a dyn DocumentStore,
}

impl<'a> OrderService<'a> {
    /// Create a new order service.
    #[must_use]
    pub const fn new(store: &'a dyn DocumentStore) -> Self {
        Self { store }
    }

    /// Convert the user's cart into an immutable order.
    ///
    /// Each line snapshots the current product name and price; a product
    /// deleted since it was added to the cart contributes an empty name and
    /// zero price. The cart record is deleted in the same document rewrite
    /// that appends the order. Stock is recorded but not decremented.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` if any shipping field is empty or the
    /// cart is absent or empty.
    pub async fn place_order(
        &self,
        user_id: UserId,
        shipping: ShippingAddress,
    ) -> Result<Order, AppError> {
        if !shipping.is_complete() {
            return Err(AppError::Validation(
                "Complete shipping info required (name,mobile,address,city,pincode)".to_string(),
            ));
        }

        let mut doc = self.store.load().await?;

        let Some(pos) = doc.carts.iter().position(|c| c.user_id == user_id) else {
            return Err(AppError::Validation("Cart empty".to_string()));
        };
        let cart = doc.carts.remove(pos);
        if cart.items.is_empty() {
            return Err(AppError::Validation("Cart empty".to_string()));
        }

        let mut total = Decimal::ZERO;
        let items: Vec<OrderLine> = cart
            .items
            .iter()
            .map(|item| {
                let product = doc.products.iter().find(|p| p.id == item.product_id);
                let price = product.map_or(Decimal::ZERO, |p| p.price);
                let name = product.map_or_else(String::new, |p| p.name.clone());
                total += price * Decimal::from(item.qty);
                OrderLine {
                    product_id: item.product_id,
                    name,
                    price,
                    qty: item.qty,
                }
            })
            .collect();

        let order = Order {
            id: OrderId::new(),
            user_id,
            items,
            total_amount: total,
            payment_mode: PaymentMode::CashOnDelivery,
            order_status: OrderStatus::Placed,
            shipping,
            created_at: Utc::now(),
        };

        doc.orders.push(order.clone());
        self.store.save(&doc).await?;
        Ok(order)
    }

    /// All orders owned by the user, in store (insertion) order.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Store` if the document cannot be loaded.
    pub async fn orders_for_user(&self, user_id: UserId) -> Result<Vec<Order>, AppError> {
        let doc = self.store.load().await?;
        Ok(doc
            .orders
            .into_iter()
            .filter(|o| o.user_id == user_id)
            .collect())
    }

    /// Every order in the store, read-only.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Store` if the document cannot be loaded.
    pub async fn all_orders(&self) -> Result<Vec<Order>, AppError> {
        let doc = self.store.load().await?;
        Ok(doc.orders)
    }
}
