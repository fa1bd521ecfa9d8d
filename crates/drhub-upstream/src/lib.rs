//! Outbound integrations: the upstream aggregation API, the local scraper
//! process, and README link verification.

pub mod client;
pub mod error;
pub mod links;
pub mod refresh;

pub use client::UpstreamClient;
pub use error::{LinkError, RefreshError, UpstreamError};
pub use links::{extract_links, ExtractedLink, LinkChecker, LinkReport, LinkResult};
pub use refresh::RefreshRunner;
