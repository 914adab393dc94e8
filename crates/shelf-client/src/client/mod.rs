//! HTTP client for the upstream product listing endpoint.

use std::time::Duration;

use reqwest::{Client, Url};
use shelf_core::Product;

use crate::error::ClientError;
use crate::retry::retry_with_backoff;

/// HTTP client for a product listing endpoint that returns a JSON array of
/// product records in a single response.
///
/// Rate limiting (429), not-found (404), and other non-2xx responses surface
/// as typed errors. Transient errors are retried with exponential backoff up
/// to `max_retries` additional attempts; the default of `0` issues exactly one
/// request per fetch.
pub struct ProductsClient {
    client: Client,
    endpoint: Url,
    max_retries: u32,
    backoff_base_secs: u64,
}

impl ProductsClient {
    /// Creates a `ProductsClient` with configured timeout, `User-Agent`, and retry policy.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidEndpoint`] if `endpoint` is not an
    /// absolute `http`/`https` URL, or [`ClientError::Http`] if the underlying
    /// `reqwest::Client` cannot be constructed.
    pub fn new(
        endpoint: &str,
        timeout_secs: u64,
        user_agent: &str,
        max_retries: u32,
        backoff_base_secs: u64,
    ) -> Result<Self, ClientError> {
        let endpoint = Self::parse_endpoint(endpoint)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            endpoint,
            max_retries,
            backoff_base_secs,
        })
    }

    /// The endpoint this client fetches from.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    /// Fetches the full product collection from the endpoint.
    ///
    /// # Errors
    ///
    /// - [`ClientError::RateLimited`]: HTTP 429 after all retries exhausted.
    /// - [`ClientError::NotFound`]: HTTP 404 (not retried).
    /// - [`ClientError::UnexpectedStatus`]: any other non-2xx status (5xx retried, 4xx not).
    /// - [`ClientError::Http`]: network or TLS failure after all retries exhausted.
    /// - [`ClientError::Deserialize`]: body is not a JSON array of products (not retried).
    pub async fn fetch_products(&self) -> Result<Vec<Product>, ClientError> {
        let url = self.endpoint.to_string();

        retry_with_backoff(self.max_retries, self.backoff_base_secs, || {
            let url = url.clone();
            async move {
                tracing::debug!(%url, "requesting product collection");
                let response = self
                    .client
                    .get(&url)
                    .header(reqwest::header::ACCEPT, "application/json")
                    .send()
                    .await?;
                let status = response.status();

                if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                    let retry_after_secs = response
                        .headers()
                        .get(reqwest::header::RETRY_AFTER)
                        .and_then(|v| v.to_str().ok())
                        .and_then(|s| s.parse::<u64>().ok())
                        .unwrap_or(60);
                    return Err(ClientError::RateLimited {
                        url,
                        retry_after_secs,
                    });
                }

                if status == reqwest::StatusCode::NOT_FOUND {
                    return Err(ClientError::NotFound { url });
                }

                if !status.is_success() {
                    return Err(ClientError::UnexpectedStatus {
                        status: status.as_u16(),
                        url,
                    });
                }

                let body = response.text().await?;
                serde_json::from_str::<Vec<Product>>(&body).map_err(|e| {
                    ClientError::Deserialize {
                        context: format!("product collection from {url}"),
                        source: e,
                    }
                })
            }
        })
        .await
    }

    fn parse_endpoint(endpoint: &str) -> Result<Url, ClientError> {
        let url = Url::parse(endpoint.trim()).map_err(|e| ClientError::InvalidEndpoint {
            endpoint: endpoint.to_owned(),
            reason: e.to_string(),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ClientError::InvalidEndpoint {
                endpoint: endpoint.to_owned(),
                reason: format!("unsupported scheme \"{}\"", url.scheme()),
            });
        }

        Ok(url)
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
