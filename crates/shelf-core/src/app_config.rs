/// Product listing endpoint used when `SHELF_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "https://api.escuelajs.co/api/v1/products";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_url: String,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Transport-level retries per fetch. `0` keeps one request per fetch.
    pub max_retries: u32,
    pub retry_backoff_base_secs: u64,
}
