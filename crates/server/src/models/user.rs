//! User domain types.

use serde::{Deserialize, Serialize};

use boutique_core::{Mobile, UserId};

/// A registered user.
///
/// Users are created on registration and never mutated or deleted. The mobile
/// number is the unique natural key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Mobile number (unique across all users).
    pub mobile: Mobile,
    /// Whether the user may perform administrative actions.
    pub is_admin: bool,
}

/// The public projection of a [`User`] returned by auth endpoints.
///
/// Deliberately omits the admin flag.
#[derive(Debug, Clone, Serialize)]
pub struct PublicUser {
    pub id: UserId,
    pub name: String,
    pub mobile: Mobile,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            mobile: user.mobile.clone(),
        }
    }
}
