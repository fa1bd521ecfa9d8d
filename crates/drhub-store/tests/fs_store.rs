//! Filesystem-backed store behavior against a temporary data directory.

use chrono::Utc;
use drhub_store::{files, DownloadOutcome, EmailEntry, JsonStore, MetricsDocument, RecordList};
use serde_json::{json, Value};

#[tokio::test]
async fn write_creates_missing_data_directory() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let data_dir = tmp.path().join("nested").join("data");
    let store = JsonStore::filesystem(&data_dir);

    store
        .write("career_path.json", &json!({"paths": []}))
        .await
        .expect("write");

    assert!(data_dir.join("career_path.json").is_file());
}

#[tokio::test]
async fn write_produces_pretty_json_with_two_space_indent() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let store = JsonStore::filesystem(tmp.path());

    store.write("doc.json", &json!({"a": [1]})).await.unwrap();

    let raw = std::fs::read_to_string(tmp.path().join("doc.json")).unwrap();
    assert_eq!(raw, "{\n  \"a\": [\n    1\n  ]\n}");
}

#[tokio::test]
async fn write_overwrites_previous_document_wholesale() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let store = JsonStore::filesystem(tmp.path());

    store
        .write("doc.json", &json!({"old": true, "keep": 1}))
        .await
        .unwrap();
    store.write("doc.json", &json!({"new": true})).await.unwrap();

    let back: Value = store.read("doc.json").await.unwrap();
    assert_eq!(back, json!({"new": true}));
}

#[tokio::test]
async fn read_or_default_tolerates_missing_and_corrupt_files() {
    let tmp = tempfile::tempdir().expect("tempdir");
    std::fs::write(tmp.path().join(files::LEGACY_BLOG_POSTS), "not json").unwrap();
    let store = JsonStore::filesystem(tmp.path());

    let legacy: RecordList = store.read_or_default(files::LEGACY_BLOG_POSTS).await;
    let repos: RecordList = store.read_or_default(files::GITHUB_REPOS).await;
    assert!(legacy.0.is_empty());
    assert!(repos.0.is_empty());
}

#[tokio::test]
async fn read_distinguishes_missing_from_corrupt() {
    let tmp = tempfile::tempdir().expect("tempdir");
    std::fs::write(tmp.path().join("bad.json"), "[").unwrap();
    let store = JsonStore::filesystem(tmp.path());

    let missing = store.read::<Value>("absent.json").await.unwrap_err();
    let corrupt = store.read::<Value>("bad.json").await.unwrap_err();
    assert!(missing.is_not_found());
    assert!(!corrupt.is_not_found());
}

#[tokio::test]
async fn merge_persists_metrics_document() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let store = JsonStore::filesystem(tmp.path());
    let incoming: MetricsDocument =
        serde_json::from_value(json!({"data": {"metrics": [{"name": "x"}]}})).unwrap();

    store.merge(incoming, Utc::now()).await.expect("merge");

    let stored: Value = store.read("metrics.json").await.unwrap();
    assert_eq!(stored["data"]["metrics"], json!([{"name": "x"}]));
    assert!(stored["metadata"]["lastUpdated"].is_string());
}

#[tokio::test]
async fn email_log_round_trips_through_disk() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let store = JsonStore::filesystem(tmp.path());

    let first = store
        .record_email_download("lead@company.dev", Some("Mozilla/5.0"), Utc::now())
        .await
        .unwrap();
    let second = store
        .record_email_download("LEAD@company.dev", None, Utc::now())
        .await
        .unwrap();

    assert_eq!(first, DownloadOutcome::New);
    assert_eq!(second, DownloadOutcome::Returning { downloads: 2 });

    let entries: Vec<EmailEntry> = store.read(files::EMAILS).await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].user_agent.as_deref(), Some("Mozilla/5.0"));
}
