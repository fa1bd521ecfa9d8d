//! Typed store documents and their merge policies.
//!
//! Every document keeps unknown top-level keys in `extra` so that schema-free
//! producers round-trip. Merges append the designated arrays and let incoming
//! values overwrite everything else.

use chrono::{DateTime, SecondsFormat, Utc};
use drhub_core::Record;
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// File names of the documents shared with the external scraper.
pub mod files {
    pub const RESOURCES: &str = "devrel_resources.json";
    pub const LEGACY_BLOG_POSTS: &str = "blog_posts.json";
    pub const GITHUB_REPOS: &str = "github_repos.json";
    pub const JOB_RESULTS: &str = "job_results.json";
    pub const EMAILS: &str = "emails.json";
}

/// A document kind with a field-level merge policy.
pub trait MergeDocument: Serialize + DeserializeOwned + Default + Send + Sync {
    const FILE_NAME: &'static str;

    #[must_use]
    fn merge(self, incoming: Self, now: DateTime<Utc>) -> Self;
}

/// RFC 3339 with millisecond precision and a `Z` suffix.
#[must_use]
pub fn timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn append<T>(mut existing: Vec<T>, incoming: Vec<T>) -> Vec<T> {
    existing.extend(incoming);
    existing
}

fn overlay(mut existing: Record, incoming: Record) -> Record {
    existing.extend(incoming);
    existing
}

/// Reads `null` as the field's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts `null` or an array and keeps only its object elements.
fn objects_only<'de, D>(deserializer: D) -> Result<Vec<Record>, D::Error>
where
    D: Deserializer<'de>,
{
    let items: Option<Vec<Value>> = Option::deserialize(deserializer)?;
    Ok(items
        .unwrap_or_default()
        .into_iter()
        .filter_map(|item| match item {
            Value::Object(map) => Some(map),
            _ => None,
        })
        .collect())
}

/// A bare JSON array of records, as written by older scraper runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RecordList(pub Vec<Record>);

impl<'de> Deserialize<'de> for RecordList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        objects_only(deserializer).map(Self)
    }
}

/// `devrel_resources.json`: the current scraper output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourcesDocument {
    #[serde(default, deserialize_with = "objects_only")]
    pub blog_posts: Vec<Record>,
    #[serde(default, deserialize_with = "objects_only")]
    pub github_programs: Vec<Record>,
    #[serde(default, deserialize_with = "objects_only")]
    pub job_listings: Vec<Record>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
    #[serde(flatten)]
    pub extra: Record,
}

impl MergeDocument for ResourcesDocument {
    const FILE_NAME: &'static str = files::RESOURCES;

    fn merge(self, incoming: Self, now: DateTime<Utc>) -> Self {
        Self {
            blog_posts: append(self.blog_posts, incoming.blog_posts),
            github_programs: append(self.github_programs, incoming.github_programs),
            job_listings: append(self.job_listings, incoming.job_listings),
            last_updated: Some(timestamp(now)),
            extra: overlay(self.extra, incoming.extra),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub metrics: Vec<Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub trends: Vec<Value>,
    #[serde(flatten)]
    pub extra: Record,
}

/// `metrics.json`.
///
/// `metadata` is shallow-merged and stamped with `lastUpdated`; `data.metrics`
/// and `data.trends` are appended.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsDocument {
    #[serde(default, deserialize_with = "null_as_default")]
    pub metadata: Record,
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: MetricsData,
    #[serde(flatten)]
    pub extra: Record,
}

impl MergeDocument for MetricsDocument {
    const FILE_NAME: &'static str = "metrics.json";

    fn merge(self, incoming: Self, now: DateTime<Utc>) -> Self {
        let mut metadata = overlay(self.metadata, incoming.metadata);
        metadata.insert("lastUpdated".to_owned(), Value::String(timestamp(now)));

        Self {
            metadata,
            data: MetricsData {
                metrics: append(self.data.metrics, incoming.data.metrics),
                trends: append(self.data.trends, incoming.data.trends),
                extra: overlay(self.data.extra, incoming.data.extra),
            },
            extra: overlay(self.extra, incoming.extra),
        }
    }
}

/// `career_path.json`: `paths` and `skills` are appended.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CareerPathDocument {
    #[serde(default, deserialize_with = "null_as_default")]
    pub paths: Vec<Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<Value>,
    #[serde(flatten)]
    pub extra: Record,
}

impl MergeDocument for CareerPathDocument {
    const FILE_NAME: &'static str = "career_path.json";

    fn merge(self, incoming: Self, _now: DateTime<Utc>) -> Self {
        Self {
            paths: append(self.paths, incoming.paths),
            skills: append(self.skills, incoming.skills),
            extra: overlay(self.extra, incoming.extra),
        }
    }
}

/// `community_graph.json`: `nodes` and `edges` are appended.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommunityGraphDocument {
    #[serde(default, deserialize_with = "null_as_default")]
    pub nodes: Vec<Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub edges: Vec<Value>,
    #[serde(flatten)]
    pub extra: Record,
}

impl MergeDocument for CommunityGraphDocument {
    const FILE_NAME: &'static str = "community_graph.json";

    fn merge(self, incoming: Self, _now: DateTime<Utc>) -> Self {
        Self {
            nodes: append(self.nodes, incoming.nodes),
            edges: append(self.edges, incoming.edges),
            extra: overlay(self.extra, incoming.extra),
        }
    }
}

/// `skills_matrix.json`: `skills` and `categories` are appended.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillsMatrixDocument {
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub categories: Vec<Value>,
    #[serde(flatten)]
    pub extra: Record,
}

impl MergeDocument for SkillsMatrixDocument {
    const FILE_NAME: &'static str = "skills_matrix.json";

    fn merge(self, incoming: Self, _now: DateTime<Utc>) -> Self {
        Self {
            skills: append(self.skills, incoming.skills),
            categories: append(self.categories, incoming.categories),
            extra: overlay(self.extra, incoming.extra),
        }
    }
}
