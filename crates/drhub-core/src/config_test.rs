use std::collections::HashMap;
use std::env::VarError;
use std::path::PathBuf;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

fn upstream_env<'a>() -> HashMap<&'a str, &'a str> {
    let mut m = HashMap::new();
    m.insert("DRHUB_UPSTREAM_URL", "https://jobs.example.com");
    m.insert("DRHUB_UPSTREAM_USERNAME", "hub");
    m.insert("DRHUB_UPSTREAM_PASSWORD", "s3cret");
    m
}

#[test]
fn parse_environment_development() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
}

#[test]
fn parse_environment_production() {
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("staging").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "DRHUB_ENV"));
}

#[test]
fn build_app_config_defaults_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).expect("defaults should be valid");

    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:3000");
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.data_dir, PathBuf::from("./data"));
    assert!(cfg.api_keys.is_empty());
    assert!(cfg.upstream.is_none());
    assert_eq!(
        cfg.refresh_command,
        vec!["python3", "scripts/scraper/devrel_scraper.py"]
    );
    assert!(cfg.refresh_cron.is_none());
    assert_eq!(
        cfg.readme_paths,
        vec![PathBuf::from("../README.md"), PathBuf::from("README.md")]
    );
    assert_eq!(cfg.link_check_timeout_secs, 10);
    assert_eq!(cfg.link_check_delay_ms, 1000);
    assert_eq!(
        cfg.whitepaper_path,
        PathBuf::from("public/content/devrel-whitepaper.md")
    );
    assert_eq!(cfg.generated_dir, PathBuf::from("public/generated"));
    assert_eq!(cfg.rate_limit_max_requests, 120);
    assert_eq!(cfg.rate_limit_window_secs, 60);
}

#[test]
fn build_app_config_fails_with_invalid_bind_addr() {
    let mut map = HashMap::new();
    map.insert("DRHUB_BIND_ADDR", "not-a-socket-addr");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "DRHUB_BIND_ADDR"),
        "expected InvalidEnvVar(DRHUB_BIND_ADDR), got: {result:?}"
    );
}

#[test]
fn build_app_config_splits_api_keys_and_drops_blanks() {
    let mut map = HashMap::new();
    map.insert("DRHUB_API_KEYS", " key-a, ,key-b,");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.api_keys, vec!["key-a", "key-b"]);
}

#[test]
fn build_app_config_reads_upstream_settings() {
    let map = upstream_env();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let upstream = cfg.upstream.expect("upstream configured");
    assert_eq!(upstream.base_url, "https://jobs.example.com");
    assert_eq!(upstream.username, "hub");
    assert_eq!(upstream.password.as_deref(), Some("s3cret"));
    assert_eq!(upstream.timeout_secs, 30);
}

#[test]
fn build_app_config_requires_username_when_upstream_set() {
    let mut map = upstream_env();
    map.remove("DRHUB_UPSTREAM_USERNAME");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "DRHUB_UPSTREAM_USERNAME"),
        "expected MissingEnvVar(DRHUB_UPSTREAM_USERNAME), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_non_http_upstream_url() {
    let mut map = upstream_env();
    map.insert("DRHUB_UPSTREAM_URL", "ftp://jobs.example.com");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "DRHUB_UPSTREAM_URL"),
        "expected InvalidEnvVar(DRHUB_UPSTREAM_URL), got: {result:?}"
    );
}

#[test]
fn build_app_config_blank_refresh_command_uses_default() {
    let mut map = HashMap::new();
    map.insert("DRHUB_REFRESH_COMMAND", "   ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.refresh_command[0], "python3");
}

#[test]
fn build_app_config_splits_refresh_command_arguments() {
    let mut map = HashMap::new();
    map.insert("DRHUB_REFRESH_COMMAND", "./bin/scrape --all  --quiet");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.refresh_command, vec!["./bin/scrape", "--all", "--quiet"]);
}

#[test]
fn build_app_config_link_check_delay_invalid() {
    let mut map = HashMap::new();
    map.insert("DRHUB_LINK_CHECK_DELAY_MS", "soon");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "DRHUB_LINK_CHECK_DELAY_MS"),
        "expected InvalidEnvVar(DRHUB_LINK_CHECK_DELAY_MS), got: {result:?}"
    );
}

#[test]
fn debug_output_redacts_secrets() {
    let mut map = upstream_env();
    map.insert("DRHUB_API_KEYS", "super-secret-key");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("super-secret-key"));
    assert!(!rendered.contains("s3cret"));
    assert!(rendered.contains("[redacted]"));
}
