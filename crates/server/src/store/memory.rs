//! In-memory store used as the test double for [`JsonFileStore`].

use std::sync::Mutex;

use async_trait::async_trait;

use super::{Document, DocumentStore, StoreError};

/// A [`DocumentStore`] holding the document in process memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    doc: Mutex<Document>,
}

impl MemoryStore {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the given document.
    #[must_use]
    pub fn with_document(doc: Document) -> Self {
        Self {
            doc: Mutex::new(doc),
        }
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn load(&self) -> Result<Document, StoreError> {
        let guard = self.doc.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        Ok(guard.clone())
    }

    async fn save(&self, doc: &Document) -> Result<(), StoreError> {
        let mut guard = self.doc.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        *guard = doc.clone();
        Ok(())
    }
}
