//! Signed session tokens.

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use boutique_core::{Mobile, UserId};

use crate::error::AppError;
use crate::models::User;

/// How long an issued token stays valid.
pub const TOKEN_TTL_DAYS: i64 = 7;

/// Session token claims.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (user ID).
    pub sub: UserId,
    /// Display name at issue time.
    pub name: String,
    /// Mobile number at issue time.
    pub mobile: Mobile,
    /// Admin flag at issue time.
    pub is_admin: bool,
    /// Issued at (Unix seconds).
    pub iat: i64,
    /// Expiration time (Unix seconds).
    pub exp: i64,
}

impl Claims {
    /// Build claims for a user with the given lifetime.
    #[must_use]
    pub fn new(user: &User, expires_in: Duration) -> Self {
        let now = Utc::now();
        Self {
            sub: user.id,
            name: user.name.clone(),
            mobile: user.mobile.clone(),
            is_admin: user.is_admin,
            iat: now.timestamp(),
            exp: (now + expires_in).timestamp(),
        }
    }

    /// Whether the claims have expired.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}

/// Session token signing and verification keys.
pub struct TokenAuth {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenAuth {
    /// Create token keys from the signing secret.
    #[must_use]
    pub fn new(secret: &SecretString) -> Self {
        let bytes = secret.expose_secret().as_bytes();
        Self {
            encoding_key: EncodingKey::from_secret(bytes),
            decoding_key: DecodingKey::from_secret(bytes),
            validation: Validation::default(),
        }
    }

    /// Issue a fresh token asserting the given user's identity.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Internal` if signing fails.
    pub fn issue(&self, user: &User) -> Result<String, AppError> {
        let claims = Claims::new(user, Duration::days(TOKEN_TTL_DAYS));
        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("token signing failed: {e}")))
    }

    /// Verify a token and return its claims.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Unauthorized` if the token is malformed, has a bad
    /// signature, or has expired.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| AppError::Unauthorized("Invalid token".to_string()))?;

        if claims.is_expired() {
            return Err(AppError::Unauthorized("Invalid token".to_string()));
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys() -> TokenAuth {
        TokenAuth::new(&SecretString::from("test-signing-secret-0123456789ab"))
    }

    fn user(is_admin: bool) -> User {
        User {
            id: UserId::new(),
            name: "Asha".to_owned(),
            mobile: Mobile::parse("9999999999").expect("valid mobile"),
            is_admin,
        }
    }

    #[test]
    fn test_issue_verify_round_trip() {
        let keys = keys();
        let user = user(false);

        let token = keys.issue(&user).expect("issue");
        assert!(token.contains('.'));

        let claims = keys.verify(&token).expect("verify");
        assert_eq!(claims.sub, user.id);
        assert_eq!(claims.name, "Asha");
        assert_eq!(claims.mobile, user.mobile);
        assert!(!claims.is_admin);
    }

    #[test]
    fn test_admin_flag_survives_round_trip() {
        let keys = keys();
        let claims = keys
            .verify(&keys.issue(&user(true)).expect("issue"))
            .expect("verify");
        assert!(claims.is_admin);
    }

    #[test]
    fn test_garbage_token_rejected() {
        assert!(matches!(
            keys().verify("not-a-token"),
            Err(AppError::Unauthorized(_))
        ));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = keys().issue(&user(false)).expect("issue");
        let other = TokenAuth::new(&SecretString::from("other-signing-secret-0123456789a"));
        assert!(matches!(
            other.verify(&token),
            Err(AppError::Unauthorized(_))
        ));
    }

    #[test]
    fn test_expired_claims_detected() {
        let claims = Claims::new(&user(false), Duration::days(-1));
        assert!(claims.is_expired());
    }

    #[test]
    fn test_fresh_claims_not_expired() {
        let claims = Claims::new(&user(false), Duration::days(TOKEN_TTL_DAYS));
        assert!(!claims.is_expired());
        assert!(claims.exp > claims.iat);
    }
}
