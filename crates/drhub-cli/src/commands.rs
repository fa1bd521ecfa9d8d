//! Command handlers for the CLI.
//!
//! Each handler takes the loaded [`AppConfig`] and prints a short summary to
//! stdout; progress goes through `tracing`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use chrono::Utc;
use drhub_core::AppConfig;
use drhub_store::{files, JsonStore, ResourcesDocument};
use drhub_upstream::{LinkChecker, RefreshRunner};
use drhub_viz::Dataset;
use rand::{rngs::StdRng, SeedableRng};

pub(crate) async fn run_refresh(config: &AppConfig) -> anyhow::Result<()> {
    let runner = RefreshRunner::new(config.refresh_command.clone());
    tracing::info!(command = ?runner.command(), "running resource refresh");
    runner.run().await?;

    let doc: ResourcesDocument = JsonStore::filesystem(&config.data_dir)
        .read_or_default(files::RESOURCES)
        .await;
    println!(
        "refresh complete: {} blog posts, {} github programs, {} job listings",
        doc.blog_posts.len(),
        doc.github_programs.len(),
        doc.job_listings.len()
    );
    Ok(())
}

/// Verifies README links, printing each broken one.
///
/// `readme` replaces the configured candidate list when given.
pub(crate) async fn run_verify_links(
    config: &AppConfig,
    readme: Option<PathBuf>,
) -> anyhow::Result<()> {
    let checker = LinkChecker::new(
        Duration::from_secs(config.link_check_timeout_secs),
        Duration::from_millis(config.link_check_delay_ms),
    )?;
    let candidates = readme.map_or_else(|| config.readme_paths.clone(), |path| vec![path]);

    let report = checker.verify_readme(&candidates).await?;
    for result in report.results.iter().filter(|r| !r.status) {
        println!("broken: {} ({})", result.url, result.title);
    }
    println!("{}", report.summary());
    Ok(())
}

pub(crate) async fn run_analyze(config: &AppConfig) -> anyhow::Result<()> {
    let doc: ResourcesDocument = JsonStore::filesystem(&config.data_dir)
        .read_or_default(files::RESOURCES)
        .await;
    let report = drhub_resources::quality_report(&doc);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Writes `<slug>.json` for every [`Dataset`] into `out_dir`.
///
/// A fixed `seed` makes the randomized datasets reproducible (timestamps
/// still follow the clock).
///
/// # Errors
///
/// Returns an error if the directory or any file cannot be written.
pub(crate) async fn seed_visualizations(
    out_dir: &Path,
    seed: Option<u64>,
) -> anyhow::Result<Vec<PathBuf>> {
    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let now = Utc::now();

    tokio::fs::create_dir_all(out_dir)
        .await
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    let mut written = Vec::with_capacity(Dataset::ALL.len());
    for dataset in Dataset::ALL {
        let value = dataset.generate(&mut rng, now)?;
        let path = out_dir.join(format!("{}.json", dataset.slug()));
        tokio::fs::write(&path, serde_json::to_vec_pretty(&value)?)
            .await
            .with_context(|| format!("failed to write {}", path.display()))?;
        tracing::debug!(dataset = %dataset, path = %path.display(), "dataset written");
        written.push(path);
    }
    Ok(written)
}
