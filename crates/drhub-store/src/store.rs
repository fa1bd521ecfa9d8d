use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Serialize};

use crate::backend::{FsBackend, MemoryBackend, StorageBackend};
use crate::documents::MergeDocument;
use crate::error::StoreError;

/// Named JSON documents over an injected [`StorageBackend`].
#[derive(Debug, Clone)]
pub struct JsonStore {
    backend: Arc<dyn StorageBackend>,
}

impl JsonStore {
    #[must_use]
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Store rooted at a data directory on disk. The directory is created on
    /// first write.
    #[must_use]
    pub fn filesystem(data_dir: impl Into<PathBuf>) -> Self {
        Self::new(Arc::new(FsBackend::new(data_dir)))
    }

    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryBackend::new()))
    }

    /// Loads and parses document `name`.
    ///
    /// # Errors
    ///
    /// - [`StoreError::NotFound`] if the document has never been written.
    /// - [`StoreError::Parse`] if the bytes are not valid JSON for `T`.
    /// - [`StoreError::Io`] / [`StoreError::InvalidName`] on backend or name failures.
    pub async fn read<T: DeserializeOwned>(&self, name: &str) -> Result<T, StoreError> {
        validate_name(name)?;
        let bytes = self
            .backend
            .load(name)
            .await?
            .ok_or_else(|| StoreError::NotFound(name.to_owned()))?;
        serde_json::from_slice(&bytes).map_err(|source| StoreError::Parse {
            name: name.to_owned(),
            source,
        })
    }

    /// Loads document `name`, substituting `T::default()` on any failure.
    ///
    /// Missing documents are expected and logged at debug; corrupt or
    /// unreadable ones are logged at warn so they stay visible.
    pub async fn read_or_default<T: DeserializeOwned + Default>(&self, name: &str) -> T {
        match self.read(name).await {
            Ok(value) => value,
            Err(StoreError::NotFound(_)) => {
                tracing::debug!(document = name, "document not found; using empty default");
                T::default()
            }
            Err(e) => {
                tracing::warn!(
                    document = name,
                    error = %e,
                    "document unreadable; using empty default"
                );
                T::default()
            }
        }
    }

    /// Serializes `data` as pretty JSON and overwrites document `name`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Serialize`] if `data` cannot be encoded, or any
    /// backend error from the write.
    pub async fn write<T: Serialize + ?Sized>(
        &self,
        name: &str,
        data: &T,
    ) -> Result<(), StoreError> {
        validate_name(name)?;
        let bytes = serde_json::to_vec_pretty(data).map_err(|source| StoreError::Serialize {
            name: name.to_owned(),
            source,
        })?;
        self.backend.save(name, &bytes).await?;
        tracing::debug!(document = name, bytes = bytes.len(), "document written");
        Ok(())
    }

    /// Reads the stored document of kind `D`, folds `incoming` into it using
    /// the kind's merge policy, persists and returns the result.
    ///
    /// # Errors
    ///
    /// Returns any error from the write. Read failures fall back to an empty
    /// document, matching [`JsonStore::read_or_default`].
    pub async fn merge<D: MergeDocument>(
        &self,
        incoming: D,
        now: DateTime<Utc>,
    ) -> Result<D, StoreError> {
        let existing: D = self.read_or_default(D::FILE_NAME).await;
        let merged = existing.merge(incoming, now);
        self.write(D::FILE_NAME, &merged).await?;
        Ok(merged)
    }
}

fn validate_name(name: &str) -> Result<(), StoreError> {
    let invalid = name.is_empty()
        || name.contains('/')
        || name.contains('\\')
        || name.contains("..")
        || name.starts_with('.');
    if invalid {
        return Err(StoreError::InvalidName(name.to_owned()));
    }
    Ok(())
}
