use crate::app_config::{AppConfig, Environment, UpstreamConfig};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files; useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup, with no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let optional = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
    };

    let or_default = |var: &str, default: &str| -> String {
        optional(var).unwrap_or_else(|| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        or_default(var, default)
            .parse::<SocketAddr>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        or_default(var, default)
            .parse::<usize>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let env = parse_environment(&or_default("DRHUB_ENV", "development"))?;

    let bind_addr = parse_addr("DRHUB_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("DRHUB_LOG_LEVEL", "info");
    let data_dir = PathBuf::from(or_default("DRHUB_DATA_DIR", "./data"));
    let api_keys = split_list(&or_default("DRHUB_API_KEYS", ""));

    let upstream = match optional("DRHUB_UPSTREAM_URL") {
        Some(base_url) => {
            if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
                return Err(invalid(
                    "DRHUB_UPSTREAM_URL",
                    format!("expected an http(s) URL, got '{base_url}'"),
                ));
            }
            let username = optional("DRHUB_UPSTREAM_USERNAME")
                .ok_or_else(|| ConfigError::MissingEnvVar("DRHUB_UPSTREAM_USERNAME".into()))?;
            Some(UpstreamConfig {
                base_url,
                username,
                password: optional("DRHUB_UPSTREAM_PASSWORD"),
                timeout_secs: parse_u64("DRHUB_UPSTREAM_TIMEOUT_SECS", "30")?,
            })
        }
        None => None,
    };

    let refresh_command: Vec<String> = or_default(
        "DRHUB_REFRESH_COMMAND",
        "python3 scripts/scraper/devrel_scraper.py",
    )
    .split_whitespace()
    .map(ToOwned::to_owned)
    .collect();

    let refresh_cron = optional("DRHUB_REFRESH_CRON");

    let readme_paths: Vec<PathBuf> = split_list(&or_default(
        "DRHUB_README_PATHS",
        "../README.md,README.md",
    ))
    .into_iter()
    .map(PathBuf::from)
    .collect();

    let link_check_timeout_secs = parse_u64("DRHUB_LINK_CHECK_TIMEOUT_SECS", "10")?;
    let link_check_delay_ms = parse_u64("DRHUB_LINK_CHECK_DELAY_MS", "1000")?;

    let whitepaper_path = PathBuf::from(or_default(
        "DRHUB_WHITEPAPER_PATH",
        "public/content/devrel-whitepaper.md",
    ));
    let generated_dir = PathBuf::from(or_default("DRHUB_GENERATED_DIR", "public/generated"));

    let rate_limit_max_requests = parse_usize("DRHUB_RATE_LIMIT_MAX_REQUESTS", "120")?;
    let rate_limit_window_secs = parse_u64("DRHUB_RATE_LIMIT_WINDOW_SECS", "60")?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        data_dir,
        api_keys,
        upstream,
        refresh_command,
        refresh_cron,
        readme_paths,
        link_check_timeout_secs,
        link_check_delay_ms,
        whitepaper_path,
        generated_dir,
        rate_limit_max_requests,
        rate_limit_window_secs,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "DRHUB_ENV".to_string(),
            reason: format!("expected development, test, or production; got '{other}'"),
        }),
    }
}

/// Comma-separated list with blank entries dropped.
fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
