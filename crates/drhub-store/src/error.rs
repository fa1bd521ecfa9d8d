use thiserror::Error;

/// Errors returned by the JSON document store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No document with this name has been written yet.
    #[error("document '{0}' not found")]
    NotFound(String),

    /// The stored bytes are not valid JSON for the requested shape.
    #[error("failed to parse document '{name}': {source}")]
    Parse {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize document '{name}': {source}")]
    Serialize {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("i/o error on document '{name}': {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// Names must be plain file names inside the data directory.
    #[error("invalid document name '{0}'")]
    InvalidName(String),
}

impl StoreError {
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
