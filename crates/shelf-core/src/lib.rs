mod app_config;
mod config;
mod products;

use thiserror::Error;

pub use app_config::{AppConfig, DEFAULT_API_URL};
pub use config::{load_app_config, load_app_config_from_env};
pub use products::{Category, Product};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
