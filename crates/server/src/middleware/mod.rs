//! Request middleware and auth extractors.

pub mod auth;

pub use auth::{ADMIN_SECRET_HEADER, AuthenticatedUser, Capability, RequireAdmin, RequireUser, authorize};
