//! Persistence for the single JSON document backing the whole service.
//!
//! All entity collections live in one [`Document`]. Every mutation is a
//! full-document read-modify-rewrite; there is no partial update and no
//! cross-process locking, so concurrent writers race and the last write wins.
//! The [`DocumentStore`] trait keeps the backend injectable: the binary uses
//! [`JsonFileStore`], unit tests use [`MemoryStore`].

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::models::{Cart, Order, Product, User};

/// Errors raised by a document store backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Reading or writing the backing medium failed.
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The persisted document could not be parsed.
    #[error("store document is corrupted: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// The persisted document: one JSON object holding every entity collection.
///
/// Collection order is insertion order and is preserved across rewrites.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Document {
    pub users: Vec<User>,
    pub products: Vec<Product>,
    pub carts: Vec<Cart>,
    pub orders: Vec<Order>,
}

/// Load/save access to the persisted [`Document`].
///
/// Implementations must return the whole document on `load` and replace it
/// wholesale on `save`.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Load the current document.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing medium cannot be read or the
    /// document cannot be parsed.
    async fn load(&self) -> Result<Document, StoreError>;

    /// Replace the persisted document.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the document cannot be written.
    async fn save(&self, doc: &Document) -> Result<(), StoreError>;
}
