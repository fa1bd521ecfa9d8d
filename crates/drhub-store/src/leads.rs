//! Whitepaper lead capture log (`emails.json`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::documents::{files, timestamp};
use crate::error::StoreError;
use crate::store::JsonStore;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailEntry {
    pub email: String,
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    #[serde(default)]
    pub downloads: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_downloaded: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadOutcome {
    /// The address was already on file; carries the updated download count.
    Returning { downloads: u64 },
    New,
}

/// Records a whitepaper download for `email` (matched case-insensitively).
pub fn record_download(
    entries: &mut Vec<EmailEntry>,
    email: &str,
    user_agent: Option<&str>,
    now: DateTime<Utc>,
) -> DownloadOutcome {
    let stamp = timestamp(now);

    if let Some(entry) = entries
        .iter_mut()
        .find(|entry| entry.email.eq_ignore_ascii_case(email))
    {
        entry.downloads += 1;
        entry.last_downloaded = Some(stamp);
        return DownloadOutcome::Returning {
            downloads: entry.downloads,
        };
    }

    entries.push(EmailEntry {
        email: email.to_owned(),
        timestamp: stamp.clone(),
        user_agent: user_agent.map(ToOwned::to_owned),
        downloads: 1,
        last_downloaded: Some(stamp),
    });
    DownloadOutcome::New
}

impl JsonStore {
    /// Loads the lead log, records the download and writes it back.
    ///
    /// Unlike most reads, a corrupt log is an error here: rewriting it from an
    /// empty default would drop every stored address.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Parse`] / [`StoreError::Io`] if the existing log
    /// cannot be read, or any error from the write.
    pub async fn record_email_download(
        &self,
        email: &str,
        user_agent: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<DownloadOutcome, StoreError> {
        let mut entries: Vec<EmailEntry> = match self.read(files::EMAILS).await {
            Ok(entries) => entries,
            Err(StoreError::NotFound(_)) => Vec::new(),
            Err(e) => return Err(e),
        };

        let outcome = record_download(&mut entries, email, user_agent, now);
        self.write(files::EMAILS, &entries).await?;
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, hour, 0, 0).unwrap()
    }

    #[test]
    fn new_address_is_appended_with_one_download() {
        let mut entries = Vec::new();
        let outcome = record_download(&mut entries, "dev@acme.io", Some("curl/8"), at(10));

        assert_eq!(outcome, DownloadOutcome::New);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].downloads, 1);
        assert_eq!(entries[0].user_agent.as_deref(), Some("curl/8"));
        assert_eq!(entries[0].timestamp, "2025-06-01T10:00:00.000Z");
    }

    #[test]
    fn returning_address_matches_case_insensitively() {
        let mut entries = Vec::new();
        record_download(&mut entries, "Dev@Acme.io", None, at(10));
        let outcome = record_download(&mut entries, "dev@acme.IO", None, at(12));

        assert_eq!(outcome, DownloadOutcome::Returning { downloads: 2 });
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].email, "Dev@Acme.io");
        assert_eq!(entries[0].timestamp, "2025-06-01T10:00:00.000Z");
        assert_eq!(
            entries[0].last_downloaded.as_deref(),
            Some("2025-06-01T12:00:00.000Z")
        );
    }

    #[test]
    fn legacy_entries_without_download_count_start_from_zero() {
        let mut entries: Vec<EmailEntry> = serde_json::from_value(serde_json::json!([
            {"email": "old@acme.io", "timestamp": "2024-01-01T00:00:00.000Z"}
        ]))
        .unwrap();

        let outcome = record_download(&mut entries, "old@acme.io", None, at(9));
        assert_eq!(outcome, DownloadOutcome::Returning { downloads: 1 });
    }

    #[tokio::test]
    async fn corrupt_log_is_not_overwritten() {
        let backend = std::sync::Arc::new(crate::MemoryBackend::new());
        crate::StorageBackend::save(backend.as_ref(), files::EMAILS, b"{oops")
            .await
            .unwrap();
        let store = JsonStore::new(backend);

        let err = store
            .record_email_download("dev@acme.io", None, at(8))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Parse { .. }));
    }
}
