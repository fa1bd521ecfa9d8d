//! JSON document store for the hub's data directory.
//!
//! Each logical document is one flat JSON file. [`JsonStore`] owns the JSON
//! encoding and name validation; byte persistence is delegated to a
//! [`StorageBackend`] so tests can run against memory.

pub mod backend;
pub mod documents;
pub mod error;
pub mod leads;
mod store;

pub use backend::{FsBackend, MemoryBackend, StorageBackend};
pub use documents::{
    files, timestamp, CareerPathDocument, CommunityGraphDocument, MergeDocument, MetricsData,
    MetricsDocument, RecordList, ResourcesDocument, SkillsMatrixDocument,
};
pub use error::StoreError;
pub use leads::{record_download, DownloadOutcome, EmailEntry};
pub use store::JsonStore;
