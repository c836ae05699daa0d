//! Order domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use boutique_core::{OrderId, OrderStatus, PaymentMode, ProductId, UserId};

/// A placed order. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique order ID.
    pub id: OrderId,
    /// Owning user.
    pub user_id: UserId,
    /// Line items snapshotted at placement time, independent of later
    /// product edits.
    pub items: Vec<OrderLine>,
    /// Sum of `price * qty` over the snapshotted lines.
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub total_amount: Decimal,
    /// Always cash on delivery.
    pub payment_mode: PaymentMode,
    /// Always `Placed`.
    pub order_status: OrderStatus,
    /// Shipping address snapshot.
    pub shipping: ShippingAddress,
    /// Placement timestamp.
    pub created_at: DateTime<Utc>,
}

/// One order line, snapshotted from the cart and catalog at placement time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub product_id: ProductId,
    /// Product name at placement; empty if the product was already deleted.
    pub name: String,
    /// Unit price at placement; zero if the product was already deleted.
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub price: Decimal,
    pub qty: u32,
}

/// Shipping address captured with an order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShippingAddress {
    pub name: String,
    pub mobile: String,
    pub address: String,
    pub city: String,
    pub pincode: String,
}

impl ShippingAddress {
    /// All five fields are required for checkout.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !(self.name.is_empty()
            || self.mobile.is_empty()
            || self.address.is_empty()
            || self.city.is_empty()
            || self.pincode.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_address() -> ShippingAddress {
        ShippingAddress {
            name: "Asha".to_owned(),
            mobile: "9999999999".to_owned(),
            address: "12 MG Road".to_owned(),
            city: "Bengaluru".to_owned(),
            pincode: "560001".to_owned(),
        }
    }

    #[test]
    fn test_complete_address() {
        assert!(full_address().is_complete());
    }

    #[test]
    fn test_each_missing_field_is_incomplete() {
        for field in ["name", "mobile", "address", "city", "pincode"] {
            let mut address = full_address();
            match field {
                "name" => address.name.clear(),
                "mobile" => address.mobile.clear(),
                "address" => address.address.clear(),
                "city" => address.city.clear(),
                _ => address.pincode.clear(),
            }
            assert!(!address.is_complete(), "{field} missing should fail");
        }
    }

    #[test]
    fn test_order_wire_shape() {
        let order = Order {
            id: OrderId::new(),
            user_id: UserId::new(),
            items: vec![OrderLine {
                product_id: ProductId::new(),
                name: "Cotton Daily Wear Saree - Blue".to_owned(),
                price: Decimal::from(1199),
                qty: 2,
            }],
            total_amount: Decimal::from(2398),
            payment_mode: PaymentMode::CashOnDelivery,
            order_status: OrderStatus::Placed,
            shipping: full_address(),
            created_at: Utc::now(),
        };

        let value = serde_json::to_value(&order).expect("serialize");
        assert_eq!(value["paymentMode"], "Cash on Delivery");
        assert_eq!(value["orderStatus"], "Placed");
        assert!(value["totalAmount"].is_number());
        assert!(value["createdAt"].is_string());
        assert_eq!(value["items"][0]["qty"], 2);
    }
}
