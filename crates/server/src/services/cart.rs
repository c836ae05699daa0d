//! Cart service.

use boutique_core::{ProductId, UserId};

use crate::error::AppError;
use crate::models::{Cart, CartItem, CartLine, CartView};
use crate::store::DocumentStore;

/// Cart service. A user's cart is created lazily on the first add.
pub struct CartService<'a> {
    store: &'a dyn DocumentStore,
}

impl<'a> CartService<'a> {
    /// Create a new cart service.
    #[must_use]
    pub const fn new(store: &'a dyn DocumentStore) -> Self {
        Self { store }
    }

    /// Coerce a client-supplied quantity.
    ///
    /// Accepts JSON numbers and numeric strings; anything that is not a
    /// positive number counts as 1. Fractional quantities truncate.
    #[must_use]
    pub fn sanitize_qty(raw: Option<&serde_json::Value>) -> u32 {
        let qty = match raw {
            Some(serde_json::Value::Number(n)) => n.as_f64().unwrap_or(0.0),
            Some(serde_json::Value::String(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
            _ => 0.0,
        };
        if qty.is_finite() && qty >= 1.0 {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            {
                qty.floor() as u32
            }
        } else {
            1
        }
    }

    /// Add a product to the user's cart.
    ///
    /// Increments the quantity when the product line already exists,
    /// otherwise appends a new line. The product ID is not checked against
    /// the catalog; dangling references resolve lazily at read time.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Store` if the document cannot be rewritten.
    pub async fn add_item(
        &self,
        user_id: UserId,
        product_id: ProductId,
        qty: u32,
    ) -> Result<Cart, AppError> {
        let mut doc = self.store.load().await?;

        let pos = doc.carts.iter().position(|c| c.user_id == user_id);
        let mut cart = match pos {
            Some(i) => doc.carts.remove(i),
            None => Cart::empty(user_id),
        };

        match cart.items.iter_mut().find(|i| i.product_id == product_id) {
            Some(item) => item.qty += qty,
            None => cart.items.push(CartItem { product_id, qty }),
        }

        doc.carts.push(cart.clone());
        self.store.save(&doc).await?;
        Ok(cart)
    }

    /// Get the user's cart joined against the current catalog.
    ///
    /// Lines whose product was deleted resolve to an empty placeholder; an
    /// absent cart reads as empty.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Store` if the document cannot be loaded.
    pub async fn get_cart(&self, user_id: UserId) -> Result<CartView, AppError> {
        let doc = self.store.load().await?;

        let items = doc
            .carts
            .iter()
            .find(|c| c.user_id == user_id)
            .map(|c| c.items.clone())
            .unwrap_or_default();

        let items = items
            .into_iter()
            .map(|item| CartLine {
                product: doc.products.iter().find(|p| p.id == item.product_id).cloned(),
                qty: item.qty,
            })
            .collect();

        Ok(CartView { user_id, items })
    }

    /// Remove a product line from the user's cart.
    ///
    /// A missing cart or line is a no-op, not an error.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Store` if the document cannot be rewritten.
    pub async fn remove_item(
        &self,
        user_id: UserId,
        product_id: ProductId,
    ) -> Result<Cart, AppError> {
        let mut doc = self.store.load().await?;

        let Some(cart) = doc.carts.iter_mut().find(|c| c.user_id == user_id) else {
            return Ok(Cart::empty(user_id));
        };

        cart.items.retain(|i| i.product_id != product_id);
        let cart = cart.clone();
        self.store.save(&doc).await?;
        Ok(cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rust_decimal::Decimal;
    use serde_json::json;

    use crate::models::Product;
    use crate::store::{Document, MemoryStore};

    fn product(name: &str, price: i64) -> Product {
        Product {
            id: ProductId::new(),
            name: name.to_owned(),
            price: Decimal::from(price),
            category: "Silk".to_owned(),
            color: String::new(),
            desc: String::new(),
            images: Vec::new(),
            stock: 5,
        }
    }

    #[test]
    fn test_sanitize_qty() {
        assert_eq!(CartService::sanitize_qty(Some(&json!(3))), 3);
        assert_eq!(CartService::sanitize_qty(Some(&json!("4"))), 4);
        assert_eq!(CartService::sanitize_qty(Some(&json!(2.9))), 2);
        // Anything that is not a positive number counts as 1.
        assert_eq!(CartService::sanitize_qty(None), 1);
        assert_eq!(CartService::sanitize_qty(Some(&json!(0))), 1);
        assert_eq!(CartService::sanitize_qty(Some(&json!(-2))), 1);
        assert_eq!(CartService::sanitize_qty(Some(&json!("abc"))), 1);
        assert_eq!(CartService::sanitize_qty(Some(&json!(null))), 1);
        assert_eq!(CartService::sanitize_qty(Some(&json!(true))), 1);
    }

    #[tokio::test]
    async fn test_add_item_accumulates_quantity() {
        let store = MemoryStore::new();
        let carts = CartService::new(&store);
        let user = UserId::new();
        let product = ProductId::new();

        carts.add_item(user, product, 2).await.expect("first add");
        let cart = carts.add_item(user, product, 3).await.expect("second add");

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].qty, 5);
    }

    #[tokio::test]
    async fn test_add_item_appends_distinct_products() {
        let store = MemoryStore::new();
        let carts = CartService::new(&store);
        let user = UserId::new();

        carts.add_item(user, ProductId::new(), 1).await.expect("add");
        let cart = carts.add_item(user, ProductId::new(), 1).await.expect("add");

        assert_eq!(cart.items.len(), 2);
    }

    #[tokio::test]
    async fn test_carts_are_per_user() {
        let store = MemoryStore::new();
        let carts = CartService::new(&store);
        let product = ProductId::new();

        carts.add_item(UserId::new(), product, 1).await.expect("add");
        carts.add_item(UserId::new(), product, 2).await.expect("add");

        let doc = store.load().await.expect("load");
        assert_eq!(doc.carts.len(), 2);
    }

    #[tokio::test]
    async fn test_get_cart_joins_current_products() {
        let p = product("Soft Silk Saree", 3499);
        let store = MemoryStore::with_document(Document {
            products: vec![p.clone()],
            ..Document::default()
        });
        let carts = CartService::new(&store);
        let user = UserId::new();

        carts.add_item(user, p.id, 2).await.expect("add");
        let view = carts.get_cart(user).await.expect("get");

        assert_eq!(view.items.len(), 1);
        let line = &view.items[0];
        assert_eq!(line.qty, 2);
        assert_eq!(
            line.product.as_ref().map(|p| p.name.as_str()),
            Some("Soft Silk Saree")
        );
    }

    #[tokio::test]
    async fn test_get_cart_tolerates_deleted_product() {
        let store = MemoryStore::new();
        let carts = CartService::new(&store);
        let user = UserId::new();

        // Dangling reference: the product never existed in the catalog.
        carts.add_item(user, ProductId::new(), 1).await.expect("add");
        let view = carts.get_cart(user).await.expect("get");

        assert_eq!(view.items.len(), 1);
        assert!(view.items[0].product.is_none());
    }

    #[tokio::test]
    async fn test_get_absent_cart_is_empty() {
        let store = MemoryStore::new();
        let carts = CartService::new(&store);

        let view = carts.get_cart(UserId::new()).await.expect("get");
        assert!(view.items.is_empty());
    }

    #[tokio::test]
    async fn test_remove_item() {
        let store = MemoryStore::new();
        let carts = CartService::new(&store);
        let user = UserId::new();
        let keep = ProductId::new();
        let drop = ProductId::new();

        carts.add_item(user, keep, 1).await.expect("add");
        carts.add_item(user, drop, 1).await.expect("add");

        let cart = carts.remove_item(user, drop).await.expect("remove");
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].product_id, keep);
    }

    #[tokio::test]
    async fn test_remove_from_absent_cart_is_noop() {
        let store = MemoryStore::new();
        let carts = CartService::new(&store);

        let cart = carts
            .remove_item(UserId::new(), ProductId::new())
            .await
            .expect("remove");
        assert!(cart.items.is_empty());
    }
}
