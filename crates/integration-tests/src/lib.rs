//! Integration tests for Boutique.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the server with test secrets
//! BOUTIQUE_JWT_SECRET=... BOUTIQUE_ADMIN_SECRET=... cargo run -p boutique-server
//!
//! # Run integration tests (ignored by default)
//! cargo test -p boutique-integration-tests -- --ignored
//! ```
//!
//! # Environment
//!
//! - `BOUTIQUE_BASE_URL` - Server base URL (default: <http://localhost:5000>)
//! - `BOUTIQUE_ADMIN_SECRET` - Shared secret for admin endpoints
//!
//! # Test Categories
//!
//! - `api_auth` - Registration and login flows
//! - `api_catalog` - Product CRUD and filtering
//! - `api_cart_orders` - Cart mutation and checkout
