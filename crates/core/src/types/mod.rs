//! Core types for Boutique.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod mobile;
pub mod status;

pub use id::*;
pub use mobile::{Mobile, MobileError};
pub use status::{OrderStatus, PaymentMode};
