//! End-to-end aggregation over an in-memory store.

use std::collections::HashSet;

use drhub_core::ResourceKind;
use drhub_resources::{aggregate, group_by_kind, load_resources, SourceSet};
use drhub_store::{files, JsonStore};
use serde_json::{json, Value};

async fn seeded_store() -> JsonStore {
    let store = JsonStore::in_memory();
    store
        .write(
            files::RESOURCES,
            &json!({
                "blog_posts": [
                    {"title": "New A", "url": "https://blog.dev/a", "resource_type": "blog", "relevance_score": 0.9}
                ],
                "github_programs": [
                    {"name": "awesome-devrel", "url": "https://github.com/devrel/awesome"},
                    {"name": "dup-of-repo", "url": "https://github.com/devrel/tools"}
                ],
                "job_listings": [
                    {"title": "Old job", "company": "Acme", "url": "https://jobs.dev/1", "date": "2024-01-01"},
                    {"title": "Undated", "company": "Acme", "url": "https://jobs.dev/2"},
                    {"title": "New job", "company": "Beta", "url": "https://jobs.dev/3", "date": "2024-06-01"},
                    {"title": "No url", "company": "Gamma"}
                ],
                "last_updated": "2024-06-02T00:00:00Z"
            }),
        )
        .await
        .unwrap();
    store
        .write(
            files::LEGACY_BLOG_POSTS,
            &json!([
                {"title": "Legacy A", "link": "https://blog.dev/a"},
                {"title": "Legacy B", "link": "https://blog.dev/b"}
            ]),
        )
        .await
        .unwrap();
    store
        .write(
            files::GITHUB_REPOS,
            &json!([
                {"name": "tools", "url": "https://github.com/devrel/tools", "type": "something-else"}
            ]),
        )
        .await
        .unwrap();
    store
}

#[tokio::test]
async fn aggregated_listing_orders_collections_and_drops_duplicates() {
    let store = seeded_store().await;
    let resources = load_resources(&store).await;

    let urls: Vec<&str> = resources.iter().filter_map(|r| r.url.as_deref()).collect();
    assert_eq!(
        urls,
        vec![
            "https://blog.dev/a",
            "https://blog.dev/b",
            "https://github.com/devrel/tools",
            "https://github.com/devrel/awesome",
            "https://jobs.dev/3",
            "https://jobs.dev/1",
            "https://jobs.dev/2",
        ]
    );

    let unique: HashSet<&str> = urls.iter().copied().collect();
    assert_eq!(unique.len(), urls.len());
}

#[tokio::test]
async fn aggregated_listing_tags_types_and_backfills_legacy_posts() {
    let store = seeded_store().await;
    let resources = load_resources(&store).await;
    let json: Vec<Value> = resources
        .iter()
        .map(|r| serde_json::to_value(r).unwrap())
        .collect();

    assert_eq!(json[0]["type"], "blog_post");
    assert_eq!(json[0]["title"], "New A");
    assert_eq!(json[1]["title"], "Legacy B");
    assert_eq!(json[1]["resource_type"], "blog");
    assert_eq!(json[1]["relevance_score"], 1);
    assert_eq!(json[2]["type"], "github");
    assert_eq!(json[2]["title"], "tools");
    assert_eq!(json[3]["description"], "");
    assert_eq!(json[4]["type"], "job_listing");
}

#[tokio::test]
async fn empty_store_aggregates_to_empty_listing() {
    let store = JsonStore::in_memory();
    assert!(load_resources(&store).await.is_empty());
}

#[test]
fn grouping_splits_by_kind() {
    let sources = SourceSet {
        blog_posts: serde_json::from_value(json!([{"url": "b1"}])).unwrap(),
        github_programs: serde_json::from_value(json!([{"url": "g1"}, {"url": "g2"}])).unwrap(),
        job_listings: serde_json::from_value(json!([{"url": "j1"}])).unwrap(),
        ..SourceSet::default()
    };

    let groups = group_by_kind(aggregate(sources));
    assert_eq!(groups.blogs.len(), 1);
    assert_eq!(groups.github.len(), 2);
    assert_eq!(groups.jobs.len(), 1);
    assert!(groups.github.iter().all(|r| r.kind == ResourceKind::Github));
}
