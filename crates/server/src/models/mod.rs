//! Domain types persisted in the document store.
//!
//! Field names serialize in camelCase: the same shapes appear in the
//! persisted document and on the wire.

pub mod cart;
pub mod order;
pub mod product;
pub mod user;

pub use cart::{Cart, CartItem, CartLine, CartView};
pub use order::{Order, OrderLine, ShippingAddress};
pub use product::Product;
pub use user::{PublicUser, User};
