//! Authentication middleware and extractors.
//!
//! Every request's credentials resolve to one [`Capability`]; route handlers
//! consume the capability through the [`RequireUser`] and [`RequireAdmin`]
//! extractors rather than inspecting headers themselves.

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header, request::Parts},
};
use secrecy::ExposeSecret;

use boutique_core::{Mobile, UserId};

use crate::error::AppError;
use crate::services::auth::Claims;
use crate::state::AppState;

/// Header carrying the shared administrative secret.
pub const ADMIN_SECRET_HEADER: &str = "x-admin-secret";

/// The identity asserted by a verified session token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub name: String,
    pub mobile: Mobile,
    pub is_admin: bool,
}

impl From<Claims> for AuthenticatedUser {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.sub,
            name: claims.name,
            mobile: claims.mobile,
            is_admin: claims.is_admin,
        }
    }
}

/// What a request is allowed to do, resolved from its credentials.
#[derive(Debug, Clone)]
pub enum Capability {
    /// No usable credential.
    Anonymous,
    /// A valid session token without the admin flag.
    User(AuthenticatedUser),
    /// Administrative access: either the shared secret (`None`) or an
    /// admin-flagged session token (`Some`).
    Admin(Option<AuthenticatedUser>),
}

/// Extract the bearer token from the `Authorization` header.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// Resolve a request's capability from its headers.
///
/// The shared secret grants admin without a user identity; otherwise a valid
/// bearer token grants user or admin per its claims. An invalid secret falls
/// through to the token path.
#[must_use]
pub fn authorize(headers: &HeaderMap, state: &AppState) -> Capability {
    if let Some(secret) = headers
        .get(ADMIN_SECRET_HEADER)
        .and_then(|v| v.to_str().ok())
        && secret == state.config().admin_secret.expose_secret()
    {
        return Capability::Admin(None);
    }

    match bearer_token(headers).map(|t| state.tokens().verify(t)) {
        Some(Ok(claims)) => {
            let user = AuthenticatedUser::from(claims);
            if user.is_admin {
                Capability::Admin(Some(user))
            } else {
                Capability::User(user)
            }
        }
        _ => Capability::Anonymous,
    }
}

/// Extractor that requires a valid session token.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireUser(user): RequireUser,
/// ) -> impl IntoResponse {
///     format!("Hello, {}!", user.name)
/// }
/// ```
#[derive(Debug)]
pub struct RequireUser(pub AuthenticatedUser);

impl FromRequestParts<AppState> for RequireUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers)
            .ok_or_else(|| AppError::Unauthorized("Missing token".to_string()))?;
        let claims = state.tokens().verify(token)?;
        Ok(Self(claims.into()))
    }
}

/// Extractor that requires administrative authorization.
///
/// Accepts the shared secret header or an admin-flagged bearer token. A valid
/// non-admin identity is rejected with 403; a request with no usable
/// credential with 401.
#[derive(Debug)]
pub struct RequireAdmin;

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match authorize(&parts.headers, state) {
            Capability::Admin(_) => Ok(Self),
            Capability::User(_) => Err(AppError::Forbidden("Admin only".to_string())),
            Capability::Anonymous => Err(AppError::Unauthorized(
                "Admin authorization required".to_string(),
            )),
        }
    }
}
