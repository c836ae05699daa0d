//! Authentication service.
//!
//! Registration and login are keyed by mobile number alone: any caller
//! claiming a registered mobile number is authenticated. That is the
//! documented contract of this demo, and it is unsuitable for any real
//! deployment; a production build would add a password or OTP factor here.

mod token;

pub use token::{Claims, TOKEN_TTL_DAYS, TokenAuth};

use boutique_core::{Mobile, UserId};

use crate::error::AppError;
use crate::models::User;
use crate::store::DocumentStore;

/// Authentication service.
///
/// Handles user registration, login, and token issuance.
pub struct AuthService<'a> {
    store: &'a dyn DocumentStore,
    tokens: &'a TokenAuth,
    admin_mobiles: &'a [String],
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(
        store: &'a dyn DocumentStore,
        tokens: &'a TokenAuth,
        admin_mobiles: &'a [String],
    ) -> Self {
        Self {
            store,
            tokens,
            admin_mobiles,
        }
    }

    /// Register a new user and return it with a fresh session token.
    ///
    /// The admin flag is set when the mobile number appears in the configured
    /// allow-list.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` if name or mobile is missing or the
    /// mobile number is malformed, and `AppError::Conflict` if the mobile
    /// number is already registered.
    pub async fn register(&self, name: &str, mobile: &str) -> Result<(User, String), AppError> {
        if name.is_empty() || mobile.is_empty() {
            return Err(AppError::Validation("name and mobile required".to_string()));
        }
        let mobile = Mobile::parse(mobile).map_err(|e| AppError::Validation(e.to_string()))?;

        let mut doc = self.store.load().await?;
        if doc.users.iter().any(|u| u.mobile == mobile) {
            return Err(AppError::Conflict("Mobile already registered".to_string()));
        }

        let user = User {
            id: UserId::new(),
            name: name.to_owned(),
            is_admin: self.admin_mobiles.iter().any(|m| m == mobile.as_str()),
            mobile,
        };
        doc.users.push(user.clone());
        self.store.save(&doc).await?;

        let token = self.tokens.issue(&user)?;
        Ok((user, token))
    }

    /// Log in an existing user and return it with a fresh session token.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` if the mobile is missing and
    /// `AppError::NotFound` if it is not registered.
    pub async fn login(&self, mobile: &str) -> Result<(User, String), AppError> {
        if mobile.is_empty() {
            return Err(AppError::Validation("mobile required".to_string()));
        }

        let doc = self.store.load().await?;
        let user = doc
            .users
            .iter()
            .find(|u| u.mobile.as_str() == mobile)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Mobile not registered".to_string()))?;

        let token = self.tokens.issue(&user)?;
        Ok((user, token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use secrecy::SecretString;

    use crate::store::MemoryStore;

    fn tokens() -> TokenAuth {
        TokenAuth::new(&SecretString::from("test-signing-secret-0123456789ab"))
    }

    #[tokio::test]
    async fn test_register_issues_verifiable_token() {
        let store = MemoryStore::new();
        let tokens = tokens();
        let auth = AuthService::new(&store, &tokens, &[]);

        let (user, token) = auth.register("Asha", "9999999999").await.expect("register");
        assert_eq!(user.name, "Asha");
        assert!(!user.is_admin);

        let claims = tokens.verify(&token).expect("verify");
        assert_eq!(claims.sub, user.id);
    }

    #[tokio::test]
    async fn test_register_duplicate_mobile_conflicts() {
        let store = MemoryStore::new();
        let tokens = tokens();
        let auth = AuthService::new(&store, &tokens, &[]);

        auth.register("Asha", "9999999999").await.expect("first");
        let err = auth
            .register("Bina", "9999999999")
            .await
            .expect_err("duplicate mobile");
        assert!(matches!(err, AppError::Conflict(_)));

        // The losing registration must not have been persisted.
        let doc = store.load().await.expect("load");
        assert_eq!(doc.users.len(), 1);
    }

    #[tokio::test]
    async fn test_register_missing_fields() {
        let store = MemoryStore::new();
        let tokens = tokens();
        let auth = AuthService::new(&store, &tokens, &[]);

        assert!(matches!(
            auth.register("", "9999999999").await,
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            auth.register("Asha", "").await,
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            auth.register("Asha", "not-a-number").await,
            Err(AppError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_register_allow_listed_mobile_is_admin() {
        let store = MemoryStore::new();
        let tokens = tokens();
        let admin_mobiles = vec!["8050990669".to_owned()];
        let auth = AuthService::new(&store, &tokens, &admin_mobiles);

        let (admin, token) = auth.register("Owner", "8050990669").await.expect("register");
        assert!(admin.is_admin);
        assert!(tokens.verify(&token).expect("verify").is_admin);

        let (user, _) = auth.register("Asha", "9999999999").await.expect("register");
        assert!(!user.is_admin);
    }

    #[tokio::test]
    async fn test_login_unregistered_mobile_not_found() {
        let store = MemoryStore::new();
        let tokens = tokens();
        let auth = AuthService::new(&store, &tokens, &[]);

        let err = auth.login("9999999999").await.expect_err("unregistered");
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_login_missing_mobile() {
        let store = MemoryStore::new();
        let tokens = tokens();
        let auth = AuthService::new(&store, &tokens, &[]);

        assert!(matches!(
            auth.login("").await,
            Err(AppError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_login_returns_existing_identity() {
        let store = MemoryStore::new();
        let tokens = tokens();
        let auth = AuthService::new(&store, &tokens, &[]);

        let (registered, _) = auth.register("Asha", "9999999999").await.expect("register");
        let (logged_in, token) = auth.login("9999999999").await.expect("login");

        assert_eq!(logged_in.id, registered.id);
        assert_eq!(tokens.verify(&token).expect("verify").sub, registered.id);
    }
}
