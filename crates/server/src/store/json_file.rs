//! Flat-file JSON store.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::{Document, DocumentStore, StoreError};

/// A [`DocumentStore`] backed by a single pretty-printed JSON file.
///
/// A missing file reads as the empty document, so a fresh deployment works
/// without any provisioning step. [`JsonFileStore::init`] materializes the
/// file eagerly so the data directory is visibly populated from first boot.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store over the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the backing file with an empty document if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the file cannot be created.
    pub async fn init(&self) -> Result<(), StoreError> {
        if tokio::fs::try_exists(&self.path).await? {
            return Ok(());
        }
        self.save(&Document::default()).await?;
        tracing::info!(path = %self.path.display(), "Created empty data file");
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for JsonFileStore {
    async fn load(&self) -> Result<Document, StoreError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Document::default()),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, doc: &Document) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(doc)?;
        tokio::fs::write(&self.path, bytes).await?;
        Ok(())
    }
}
