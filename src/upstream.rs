//! Client for the upstream hotel-search API
//!
//! The upstream is opaque: the prompt goes out as `{"prompt": ...}` and the
//! answer comes back as raw JSON that is only checked for well-formedness.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::value::RawValue;
use tracing::{debug, info, instrument, warn};

use crate::config::UpstreamConfig;
use crate::{Result, TravelAiError};

/// Path appended to the configured base URL
pub const HOTELS_PATH: &str = "/api/v1/hotels";

/// Something that turns a prompt into a JSON list of result groups
#[async_trait]
pub trait HotelSearch: Send + Sync {
    async fn search(&self, prompt: &str) -> Result<Box<RawValue>>;
}

#[derive(Serialize)]
struct SearchPayload<'a> {
    prompt: &'a str,
}

/// reqwest-backed hotel-search client
pub struct UpstreamClient {
    client: Client,
    endpoint: String,
    timeout: Duration,
}

impl UpstreamClient {
    /// Create a new client for the given upstream settings
    pub fn new(config: &UpstreamConfig) -> Result<Self> {
        let timeout = Duration::from_secs(config.timeout_seconds.into());
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("TravelAI/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TravelAiError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: hotels_url(&config.base_url),
            timeout,
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn map_send_error(&self, err: reqwest::Error) -> TravelAiError {
        if err.is_timeout() {
            TravelAiError::Timeout {
                seconds: self.timeout.as_secs(),
            }
        } else {
            TravelAiError::network(format!("Upstream request failed: {err}"))
        }
    }
}

#[async_trait]
impl HotelSearch for UpstreamClient {
    #[instrument(skip(self, prompt), fields(prompt_len = prompt.len()))]
    async fn search(&self, prompt: &str) -> Result<Box<RawValue>> {
        let start_time = Instant::now();
        debug!(endpoint = %self.endpoint, "Calling the hotel-search API");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&SearchPayload { prompt })
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(%status, body = %error_text, "Upstream returned an error status");
            return Err(TravelAiError::Upstream {
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await.map_err(|e| self.map_send_error(e))?;
        let body: Box<RawValue> = serde_json::from_slice(&bytes).map_err(|e| {
            TravelAiError::invalid_response(format!("Upstream body is not JSON: {e}"))
        })?;

        debug!(bytes = bytes.len(), "Upstream body received");
        info!(
            "Upstream search completed in {:.3}s",
            start_time.elapsed().as_secs_f64()
        );

        Ok(body)
    }
}

/// Join the base URL and the hotels path
#[must_use]
pub fn hotels_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), HOTELS_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("http://localhost:8000", "http://localhost:8000/api/v1/hotels")]
    #[case("http://localhost:8000/", "http://localhost:8000/api/v1/hotels")]
    #[case("https://search.example/v2", "https://search.example/v2/api/v1/hotels")]
    fn test_hotels_url(#[case] base: &str, #[case] expected: &str) {
        assert_eq!(hotels_url(base), expected);
    }

    #[test]
    fn test_payload_shape() {
        let json = serde_json::to_string(&SearchPayload { prompt: "море" }).unwrap();
        assert_eq!(json, r#"{"prompt":"море"}"#);
    }

    #[test]
    fn test_client_creation() {
        let config = UpstreamConfig {
            base_url: "http://localhost:8000/".to_string(),
            timeout_seconds: 5,
        };
        let client = UpstreamClient::new(&config).unwrap();
        assert_eq!(client.endpoint(), "http://localhost:8000/api/v1/hotels");
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_network_error() {
        let config = UpstreamConfig {
            // Port 9 (discard) on loopback is not expected to accept connections
            base_url: "http://127.0.0.1:9".to_string(),
            timeout_seconds: 5,
        };
        let client = UpstreamClient::new(&config).unwrap();
        let err = client.search("anything").await.unwrap_err();
        assert!(matches!(
            err,
            TravelAiError::Network { .. } | TravelAiError::Timeout { .. }
        ));
    }
}
