//! Product domain type.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use boutique_core::ProductId;

/// Category assigned when a product is created without one.
pub const DEFAULT_CATEGORY: &str = "Sarees";

/// A catalog product.
///
/// Created and mutated only by administrative actors. `stock` is recorded but
/// never decremented by order placement.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Unit price; non-negative. Serialized as a JSON number, deserialized
    /// from numbers or numeric strings.
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub price: Decimal,
    /// Category label.
    pub category: String,
    /// Color label.
    pub color: String,
    /// Free-text description.
    pub desc: String,
    /// Ordered image URLs.
    pub images: Vec<String>,
    /// Units on hand.
    pub stock: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_serializes_as_number() {
        let product = Product {
            id: ProductId::new(),
            name: "Banarasi Saree - Gold Zari".to_owned(),
            price: Decimal::from(12999),
            category: DEFAULT_CATEGORY.to_owned(),
            color: "Gold".to_owned(),
            desc: String::new(),
            images: Vec::new(),
            stock: 3,
        };
        let value = serde_json::to_value(&product).expect("serialize");
        assert!(value["price"].is_number());
        assert_eq!(value["category"], "Sarees");
    }

    #[test]
    fn test_price_deserializes_from_string_or_number() {
        let id = ProductId::new();
        let from_string: Product = serde_json::from_value(serde_json::json!({
            "id": id, "name": "x", "price": "250", "category": "Sarees",
            "color": "", "desc": "", "images": [], "stock": 0
        }))
        .expect("string price");
        assert_eq!(from_string.price, Decimal::from(250));

        let from_number: Product = serde_json::from_value(serde_json::json!({
            "id": id, "name": "x", "price": 250, "category": "Sarees",
            "color": "", "desc": "", "images": [], "stock": 0
        }))
        .expect("numeric price");
        assert_eq!(from_number.price, Decimal::from(250));
    }
}
