//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                    - Health check
//!
//! # Auth
//! POST /api/auth/register         - Register (name + mobile)
//! POST /api/auth/login            - Login (mobile only)
//!
//! # Products
//! GET    /api/products            - List products (?q, category, minPrice, maxPrice, sortBy)
//! GET    /api/products/{id}       - Product detail
//! POST   /api/products            - Create product (admin)
//! PUT    /api/products/{id}       - Update product (admin)
//! DELETE /api/products/{id}       - Delete product (admin)
//!
//! # Cart (requires user token)
//! POST   /api/cart                - Add to cart
//! GET    /api/cart                - Get cart joined with current products
//! DELETE /api/cart/{productId}    - Remove a line
//!
//! # Orders
//! POST /api/order                 - Place order from cart (user)
//! GET  /api/orders                - List own orders (user)
//! GET  /api/admin/orders          - List all orders (admin)
//! ```

pub mod auth;
pub mod cart;
pub mod orders;
pub mod products;

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index).post(products::create))
        .route(
            "/{id}",
            get(products::show)
                .put(products::update)
                .delete(products::destroy),
        )
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show).post(cart::add))
        .route("/{productId}", delete(cart::remove))
}

/// Create all routes for the API.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/api/auth", auth_routes())
        .nest("/api/products", product_routes())
        .nest("/api/cart", cart_routes())
        // Orders
        .route("/api/order", post(orders::place))
        .route("/api/orders", get(orders::index))
        .route("/api/admin/orders", get(orders::admin_index))
}
