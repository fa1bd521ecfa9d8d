//! Byte-level storage backends behind [`crate::JsonStore`].

use std::collections::HashMap;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::StoreError;

/// Raw document persistence keyed by file name.
///
/// Implementations never interpret the bytes; JSON handling lives in
/// [`crate::JsonStore`]. `load` returns `Ok(None)` when the document does
/// not exist so the store can tell "missing" apart from I/O failure.
#[async_trait]
pub trait StorageBackend: Send + Sync + std::fmt::Debug {
    async fn load(&self, name: &str) -> Result<Option<Vec<u8>>, StoreError>;

    async fn save(&self, name: &str, bytes: &[u8]) -> Result<(), StoreError>;
}

/// Flat JSON files in a single data directory.
///
/// Writes overwrite the whole file. There is no atomic rename and no backup;
/// concurrent writers to the same name race and the last write wins.
#[derive(Debug, Clone)]
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &std::path::Path {
        &self.root
    }
}

#[async_trait]
impl StorageBackend for FsBackend {
    async fn load(&self, name: &str) -> Result<Option<Vec<u8>>, StoreError> {
        match tokio::fs::read(self.root.join(name)).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Io {
                name: name.to_owned(),
                source,
            }),
        }
    }

    async fn save(&self, name: &str, bytes: &[u8]) -> Result<(), StoreError> {
        let io_err = |source: std::io::Error| StoreError::Io {
            name: name.to_owned(),
            source,
        };
        tokio::fs::create_dir_all(&self.root).await.map_err(io_err)?;
        tokio::fs::write(self.root.join(name), bytes)
            .await
            .map_err(io_err)
    }
}

/// In-process backend used by tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    documents: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StorageBackend for MemoryBackend {
    async fn load(&self, name: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.documents.lock().await.get(name).cloned())
    }

    async fn save(&self, name: &str, bytes: &[u8]) -> Result<(), StoreError> {
        self.documents
            .lock()
            .await
            .insert(name.to_owned(), bytes.to_vec());
        Ok(())
    }
}
