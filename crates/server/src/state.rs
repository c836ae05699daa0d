//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::services::auth::TokenAuth;
use crate::store::DocumentStore;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// injected document store, configuration, and token keys.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    store: Box<dyn DocumentStore>,
    tokens: TokenAuth,
}

impl AppState {
    /// Create a new application state over the given store backend.
    #[must_use]
    pub fn new(config: ServerConfig, store: Box<dyn DocumentStore>) -> Self {
        let tokens = TokenAuth::new(&config.jwt_secret);
        Self {
            inner: Arc::new(AppStateInner {
                config,
                store,
                tokens,
            }),
        }
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Get a reference to the document store.
    #[must_use]
    pub fn store(&self) -> &dyn DocumentStore {
        self.inner.store.as_ref()
    }

    /// Get a reference to the session token keys.
    #[must_use]
    pub fn tokens(&self) -> &TokenAuth {
        &self.inner.tokens
    }
}
