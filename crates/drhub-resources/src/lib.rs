//! Resource aggregation over the scraper's JSON files, plus the data quality
//! report and whitepaper rendering that work on the same content.
//!
//! Pipeline: load sources → reconcile legacy blog posts → normalize each
//! collection → concatenate (blogs, GitHub, jobs newest-first) → drop
//! duplicates by `url`, first occurrence wins.

pub mod merge;
pub mod normalize;
pub mod quality;
pub mod whitepaper;

use drhub_core::{Record, Resource, ResourceKind};
use drhub_store::{files, JsonStore, RecordList, ResourcesDocument};
use serde::Serialize;

pub use merge::{dedupe_by_key, merge_blog_posts, sort_jobs_desc};
pub use normalize::{identity_key, normalize};
pub use quality::{quality_report, Counts, QualityReport, SampledCounts};
pub use whitepaper::{render_whitepaper, write_whitepaper, WhitepaperError};

/// Raw source collections feeding one aggregation pass.
#[derive(Debug, Clone, Default)]
pub struct SourceSet {
    pub blog_posts: Vec<Record>,
    pub legacy_blog_posts: Vec<Record>,
    pub github_repos: Vec<Record>,
    pub github_programs: Vec<Record>,
    pub job_listings: Vec<Record>,
}

impl SourceSet {
    /// Reads every source file; missing or corrupt files contribute nothing.
    pub async fn load(store: &JsonStore) -> Self {
        let current: ResourcesDocument = store.read_or_default(files::RESOURCES).await;
        let legacy: RecordList = store.read_or_default(files::LEGACY_BLOG_POSTS).await;
        let repos: RecordList = store.read_or_default(files::GITHUB_REPOS).await;

        Self {
            blog_posts: current.blog_posts,
            legacy_blog_posts: legacy.0,
            github_repos: repos.0,
            github_programs: current.github_programs,
            job_listings: current.job_listings,
        }
    }
}

/// Builds the de-duplicated resource listing.
#[must_use]
pub fn aggregate(sources: SourceSet) -> Vec<Resource> {
    let SourceSet {
        blog_posts,
        legacy_blog_posts,
        github_repos,
        github_programs,
        mut job_listings,
    } = sources;

    let blogs = merge_blog_posts(blog_posts, legacy_blog_posts);
    sort_jobs_desc(&mut job_listings);

    let combined = blogs
        .into_iter()
        .map(|r| normalize(r, ResourceKind::BlogPost))
        .chain(
            github_repos
                .into_iter()
                .chain(github_programs)
                .map(|r| normalize(r, ResourceKind::Github)),
        )
        .chain(
            job_listings
                .into_iter()
                .map(|r| normalize(r, ResourceKind::JobListing)),
        );

    dedupe_by_key(combined)
}

/// Convenience wrapper: [`SourceSet::load`] followed by [`aggregate`].
pub async fn load_resources(store: &JsonStore) -> Vec<Resource> {
    let resources = aggregate(SourceSet::load(store).await);
    tracing::debug!(count = resources.len(), "aggregated resources");
    resources
}

/// Aggregated resources split by kind, for visualization pages.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ResourceGroups {
    pub github: Vec<Resource>,
    pub blogs: Vec<Resource>,
    pub jobs: Vec<Resource>,
}

#[must_use]
pub fn group_by_kind(resources: Vec<Resource>) -> ResourceGroups {
    let mut groups = ResourceGroups::default();
    for resource in resources {
        match resource.kind {
            ResourceKind::Github => groups.github.push(resource),
            ResourceKind::BlogPost => groups.blogs.push(resource),
            ResourceKind::JobListing => groups.jobs.push(resource),
        }
    }
    groups
}
