use std::collections::HashMap;
use std::env::VarError;

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

#[test]
fn build_app_config_uses_defaults_when_env_is_empty() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).expect("defaults should be valid");
    assert_eq!(cfg.api_url, DEFAULT_API_URL);
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.request_timeout_secs, 30);
    assert_eq!(cfg.user_agent, "shelf/0.1 (catalog-viewer)");
    assert_eq!(cfg.max_retries, 0);
    assert_eq!(cfg.retry_backoff_base_secs, 1);
}

#[test]
fn build_app_config_api_url_override() {
    let mut map = HashMap::new();
    map.insert("SHELF_API_URL", "http://localhost:8080/products");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.api_url, "http://localhost:8080/products");
}

#[test]
fn build_app_config_rejects_blank_api_url() {
    let mut map = HashMap::new();
    map.insert("SHELF_API_URL", "   ");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SHELF_API_URL"),
        "expected InvalidEnvVar(SHELF_API_URL), got: {result:?}"
    );
}

#[test]
fn build_app_config_log_level_override() {
    let mut map = HashMap::new();
    map.insert("SHELF_LOG_LEVEL", "debug");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.log_level, "debug");
}

#[test]
fn build_app_config_request_timeout_override() {
    let mut map = HashMap::new();
    map.insert("SHELF_REQUEST_TIMEOUT_SECS", "5");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.request_timeout_secs, 5);
}

#[test]
fn build_app_config_request_timeout_invalid() {
    let mut map = HashMap::new();
    map.insert("SHELF_REQUEST_TIMEOUT_SECS", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SHELF_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(SHELF_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn build_app_config_max_retries_override() {
    let mut map = HashMap::new();
    map.insert("SHELF_MAX_RETRIES", "3");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.max_retries, 3);
}

#[test]
fn build_app_config_max_retries_invalid() {
    let mut map = HashMap::new();
    map.insert("SHELF_MAX_RETRIES", "-1");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SHELF_MAX_RETRIES"),
        "expected InvalidEnvVar(SHELF_MAX_RETRIES), got: {result:?}"
    );
}

#[test]
fn build_app_config_backoff_invalid() {
    let mut map = HashMap::new();
    map.insert("SHELF_RETRY_BACKOFF_BASE_SECS", "soon");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SHELF_RETRY_BACKOFF_BASE_SECS"),
        "expected InvalidEnvVar(SHELF_RETRY_BACKOFF_BASE_SECS), got: {result:?}"
    );
}
