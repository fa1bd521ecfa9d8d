mod app_config;
mod config;
mod resources;

pub use app_config::{AppConfig, Environment, UpstreamConfig};
pub use config::{load_app_config, load_app_config_from_env};
pub use resources::{Record, Resource, ResourceKind};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
