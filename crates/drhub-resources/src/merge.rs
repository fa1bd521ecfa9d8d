//! Legacy reconciliation, job ordering and first-seen-wins de-duplication.

use std::collections::HashSet;

use drhub_core::{Record, Resource};
use serde_json::Value;

use crate::normalize::{identity_key, non_empty_str};

/// Appends legacy posts whose identity key is absent from `new_posts`.
///
/// Appended posts get `resource_type = "blog"` and `relevance_score = 1`
/// when those fields are missing (or empty / non-numeric respectively).
#[must_use]
pub fn merge_blog_posts(new_posts: Vec<Record>, legacy_posts: Vec<Record>) -> Vec<Record> {
    let known: HashSet<String> = new_posts
        .iter()
        .filter_map(identity_key)
        .map(ToOwned::to_owned)
        .collect();

    let mut merged = new_posts;
    let mut appended = 0usize;
    for mut post in legacy_posts {
        if identity_key(&post).is_some_and(|key| known.contains(key)) {
            continue;
        }
        backfill_legacy(&mut post);
        merged.push(post);
        appended += 1;
    }

    tracing::debug!(
        appended,
        total = merged.len(),
        "merged legacy blog posts"
    );
    merged
}

fn backfill_legacy(post: &mut Record) {
    if non_empty_str(post, "resource_type").is_none() {
        post.insert("resource_type".to_owned(), Value::String("blog".to_owned()));
    }
    if !post.get("relevance_score").is_some_and(Value::is_number) {
        post.insert("relevance_score".to_owned(), Value::from(1));
    }
}

fn date_key(job: &Record) -> &str {
    job.get("date")
        .and_then(Value::as_str)
        .or_else(|| job.get("added_at").and_then(Value::as_str))
        .unwrap_or("")
}

/// Sorts job listings newest-first by raw string comparison of `date`
/// (falling back to `added_at`). Undated entries compare as `""` and sort last.
///
/// The sort is stable, so equal dates keep their source order.
pub fn sort_jobs_desc(jobs: &mut [Record]) {
    jobs.sort_by(|a, b| date_key(b).cmp(date_key(a)));
}

/// Keeps the first resource per `url`; resources without one are dropped.
#[must_use]
pub fn dedupe_by_key<I>(resources: I) -> Vec<Resource>
where
    I: IntoIterator<Item = Resource>,
{
    let mut seen: HashSet<String> = HashSet::new();
    let mut dropped = 0usize;

    let kept: Vec<Resource> = resources
        .into_iter()
        .filter(|resource| {
            let keep = match resource.url.as_deref() {
                Some(key) if !key.is_empty() => seen.insert(key.to_owned()),
                _ => false,
            };
            if !keep {
                dropped += 1;
            }
            keep
        })
        .collect();

    if dropped > 0 {
        tracing::debug!(dropped, kept = kept.len(), "dropped duplicate or keyless resources");
    }
    kept
}
