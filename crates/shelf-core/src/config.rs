use crate::app_config::{AppConfig, DEFAULT_API_URL};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is present but its value is invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is present but its value is invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so only malformed values fail.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let api_url = or_default("SHELF_API_URL", DEFAULT_API_URL);
    if api_url.trim().is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "SHELF_API_URL".to_string(),
            reason: "must not be empty".to_string(),
        });
    }

    let log_level = or_default("SHELF_LOG_LEVEL", "info");
    let request_timeout_secs = parse_u64("SHELF_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("SHELF_USER_AGENT", "shelf/0.1 (catalog-viewer)");
    let max_retries = parse_u32("SHELF_MAX_RETRIES", "0")?;
    let retry_backoff_base_secs = parse_u64("SHELF_RETRY_BACKOFF_BASE_SECS", "1")?;

    Ok(AppConfig {
        api_url,
        log_level,
        request_timeout_secs,
        user_agent,
        max_retries,
        retry_backoff_base_secs,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
