//! Business services over the document store.
//!
//! Each service borrows the injected [`crate::store::DocumentStore`] and
//! performs a full load-mutate-save cycle per operation.

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod orders;

pub use auth::{AuthService, TokenAuth};
pub use cart::CartService;
pub use catalog::{CatalogService, NewProduct, ProductFilter, ProductPatch, SortOrder};
pub use orders::OrderService;
