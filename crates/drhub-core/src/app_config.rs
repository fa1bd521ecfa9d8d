use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Connection settings for the upstream aggregation service.
///
/// Present only when `DRHUB_UPSTREAM_URL` is set.
#[derive(Clone)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub username: String,
    pub password: Option<String>,
    pub timeout_secs: u64,
}

impl std::fmt::Debug for UpstreamConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamConfig")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "[redacted]"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub data_dir: PathBuf,
    pub api_keys: Vec<String>,
    pub upstream: Option<UpstreamConfig>,
    /// Program followed by its arguments; never empty.
    pub refresh_command: Vec<String>,
    pub refresh_cron: Option<String>,
    pub readme_paths: Vec<PathBuf>,
    pub link_check_timeout_secs: u64,
    pub link_check_delay_ms: u64,
    pub whitepaper_path: PathBuf,
    pub generated_dir: PathBuf,
    pub rate_limit_max_requests: usize,
    pub rate_limit_window_secs: u64,
}

impl AppConfig {
    #[must_use]
    pub fn is_development(&self) -> bool {
        self.env == Environment::Development
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("data_dir", &self.data_dir)
            .field("api_keys", &format_args!("[{} redacted]", self.api_keys.len()))
            .field("upstream", &self.upstream)
            .field("refresh_command", &self.refresh_command)
            .field("refresh_cron", &self.refresh_cron)
            .field("readme_paths", &self.readme_paths)
            .field("link_check_timeout_secs", &self.link_check_timeout_secs)
            .field("link_check_delay_ms", &self.link_check_delay_ms)
            .field("whitepaper_path", &self.whitepaper_path)
            .field("generated_dir", &self.generated_dir)
            .field("rate_limit_max_requests", &self.rate_limit_max_requests)
            .field("rate_limit_window_secs", &self.rate_limit_window_secs)
            .finish()
    }
}
