use std::path::Path;

use drhub_core::{AppConfig, Environment};

/// Development config rooted at `dir`, with link checks that do not pause.
pub(crate) fn config(dir: &Path) -> AppConfig {
    AppConfig {
        env: Environment::Development,
        bind_addr: ([127, 0, 0, 1], 0).into(),
        log_level: "debug".to_owned(),
        data_dir: dir.join("data"),
        api_keys: Vec::new(),
        upstream: None,
        refresh_command: vec!["true".to_owned()],
        refresh_cron: None,
        readme_paths: vec![dir.join("README.md")],
        link_check_timeout_secs: 2,
        link_check_delay_ms: 0,
        whitepaper_path: dir.join("whitepaper.md"),
        generated_dir: dir.join("generated"),
        rate_limit_max_requests: 120,
        rate_limit_window_secs: 60,
    }
}
