//! Auth route handlers.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::extract::AppJson;
use crate::models::PublicUser;
use crate::services::AuthService;
use crate::state::AppState;

/// Registration request body.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub mobile: String,
}

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub mobile: String,
}

/// Response for both auth endpoints.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub message: &'static str,
    pub token: String,
    pub user: PublicUser,
}

/// Register a new user.
///
/// POST /api/auth/register
///
/// # Errors
///
/// 400 when name or mobile is missing or malformed, 400 when the mobile
/// number is already registered.
pub async fn register(
    State(state): State<AppState>,
    AppJson(req): AppJson<RegisterRequest>,
) -> Result<Json<AuthResponse>> {
    let auth = AuthService::new(
        state.store(),
        state.tokens(),
        &state.config().admin_mobiles,
    );
    let (user, token) = auth.register(&req.name, &req.mobile).await?;

    tracing::info!(user_id = %user.id, "User registered");
    Ok(Json(AuthResponse {
        message: "Registered",
        token,
        user: PublicUser::from(&user),
    }))
}

/// Log in an existing user.
///
/// POST /api/auth/login
///
/// No secret beyond the mobile number is checked; see the auth service docs.
///
/// # Errors
///
/// 400 when the mobile is missing, 404 when it is not registered.
pub async fn login(
    State(state): State<AppState>,
    AppJson(req): AppJson<LoginRequest>,
) -> Result<Json<AuthResponse>> {
    let auth = AuthService::new(
        state.store(),
        state.tokens(),
        &state.config().admin_mobiles,
    );
    let (user, token) = auth.login(&req.mobile).await?;

    Ok(Json(AuthResponse {
        message: "Logged in",
        token,
        user: PublicUser::from(&user),
    }))
}
