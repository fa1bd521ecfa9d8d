use thiserror::Error;

/// Errors returned by [`crate::UpstreamClient`].
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The upstream answered with a non-2xx status. The body is kept verbatim
    /// so callers can relay it.
    #[error("upstream returned {status}")]
    Status { status: u16, body: String },

    /// The response body could not be parsed as JSON.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid upstream base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

/// Errors from the README link verifier.
#[derive(Debug, Error)]
pub enum LinkError {
    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    /// None of the candidate README paths could be read.
    #[error("no readable README among {tried}")]
    ReadmeNotFound {
        tried: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors from [`crate::RefreshRunner`].
#[derive(Debug, Error)]
pub enum RefreshError {
    #[error("refresh command is empty")]
    EmptyCommand,

    #[error("failed to spawn '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed waiting for refresh command: {0}")]
    Wait(#[source] std::io::Error),

    /// The command ran but exited unsuccessfully. `code` is `None` when the
    /// process was killed by a signal.
    #[error("refresh command exited with {}", describe_code(*.code))]
    Failed { code: Option<i32> },
}

fn describe_code(code: Option<i32>) -> String {
    code.map_or_else(|| "no exit code".to_owned(), |c| format!("code {c}"))
}
