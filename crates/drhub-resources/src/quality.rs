//! Data quality report over the current scraper output.

use drhub_core::Record;
use drhub_store::ResourcesDocument;
use serde::Serialize;
use serde_json::Value;

const SAMPLE_SIZE: usize = 3;

const BLOG_POST_FIELDS: &[&str] = &["title", "url", "source"];
const GITHUB_PROGRAM_FIELDS: &[&str] = &["name", "url", "description"];
const JOB_LISTING_FIELDS: &[&str] = &["title", "company", "url"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualityReport {
    pub blog_posts: SampledCounts,
    pub github_programs: Counts,
    pub job_listings: Counts,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Counts {
    pub total: usize,
    pub valid: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampledCounts {
    pub total: usize,
    pub valid: usize,
    pub sample: Vec<Record>,
}

/// A field counts as present unless it is missing, `null`, `false`, `0` or `""`.
fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null | Value::Bool(false)) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f.abs() > 0.0),
        Some(_) => true,
    }
}

fn counts(records: &[Record], required: &[&str]) -> Counts {
    let valid = records
        .iter()
        .filter(|record| required.iter().all(|field| is_present(record.get(*field))))
        .count();
    Counts {
        total: records.len(),
        valid,
    }
}

/// Counts entries per collection and how many carry every display field.
#[must_use]
pub fn quality_report(doc: &ResourcesDocument) -> QualityReport {
    let blog = counts(&doc.blog_posts, BLOG_POST_FIELDS);
    QualityReport {
        blog_posts: SampledCounts {
            total: blog.total,
            valid: blog.valid,
            sample: doc.blog_posts.iter().take(SAMPLE_SIZE).cloned().collect(),
        },
        github_programs: counts(&doc.github_programs, GITHUB_PROGRAM_FIELDS),
        job_listings: counts(&doc.job_listings, JOB_LISTING_FIELDS),
    }
}
