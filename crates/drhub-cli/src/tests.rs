use super::*;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["drhub-cli"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn parses_refresh_and_analyze() {
    let cli = Cli::try_parse_from(["drhub-cli", "refresh"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Some(Commands::Refresh)));

    let cli = Cli::try_parse_from(["drhub-cli", "analyze"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Some(Commands::Analyze)));
}

#[test]
fn verify_links_accepts_readme_override() {
    let cli = Cli::try_parse_from(["drhub-cli", "verify-links", "--readme", "docs/README.md"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::VerifyLinks { readme: Some(ref p) }) if p == std::path::Path::new("docs/README.md")
    ));
}

#[test]
fn seed_visualizations_defaults() {
    let cli = Cli::try_parse_from(["drhub-cli", "seed-visualizations"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::SeedVisualizations {
            seed: None,
            out: None
        })
    ));
}

#[test]
fn seed_visualizations_with_seed() {
    let cli = Cli::try_parse_from(["drhub-cli", "seed-visualizations", "--seed", "7"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::SeedVisualizations { seed: Some(7), .. })
    ));
}

#[test]
fn seed_must_be_numeric() {
    assert!(Cli::try_parse_from(["drhub-cli", "seed-visualizations", "--seed", "abc"]).is_err());
}

#[test]
fn render_whitepaper_accepts_paths() {
    let cli = Cli::try_parse_from([
        "drhub-cli",
        "render-whitepaper",
        "--source",
        "paper.md",
        "--out-dir",
        "out",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::RenderWhitepaper {
            source: Some(_),
            out_dir: Some(_)
        })
    ));
}

#[test]
fn unknown_command_is_rejected() {
    assert!(Cli::try_parse_from(["drhub-cli", "collect"]).is_err());
}

#[tokio::test]
async fn seed_visualizations_writes_every_dataset() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("viz");

    let written = commands::seed_visualizations(&out, Some(42))
        .await
        .expect("seed");
    assert_eq!(written.len(), drhub_viz::Dataset::ALL.len());

    let career: serde_json::Value =
        serde_json::from_slice(&std::fs::read(out.join("career-path.json")).expect("file"))
            .expect("json");
    assert!(career["nodes"].as_array().is_some_and(|n| !n.is_empty()));
}

#[tokio::test]
async fn seeded_matrix_is_reproducible() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (a, b) = (dir.path().join("a"), dir.path().join("b"));

    commands::seed_visualizations(&a, Some(9)).await.expect("seed a");
    commands::seed_visualizations(&b, Some(9)).await.expect("seed b");

    let read = |p: std::path::PathBuf| std::fs::read(p.join("skills-matrix.json")).expect("file");
    assert_eq!(read(a), read(b));
}

#[test]
fn log_filter_prefers_rust_log_then_configured_level() {
    use tracing_subscriber::filter::LevelFilter;

    let filter = log_filter(Some("drhub_upstream=debug"), "info").expect("filter");
    assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));

    let filter = log_filter(None, "info").expect("filter");
    assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));

    let filter = log_filter(Some("drhub=loud"), "warn").expect("filter");
    assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
}
