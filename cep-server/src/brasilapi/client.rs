//! BrasilAPI HTTP client.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CACHE_CONTROL, HeaderMap, HeaderValue, PRAGMA};

use crate::domain::Ddd;
use crate::lookup::http::{build_http, decode, fetch_text, parse_base_url, with_segments};
use crate::lookup::{AreaCodeInfo, AreaCodeSource, LookupError, Upstream};

/// Default base URL for BrasilAPI.
const DEFAULT_BASE_URL: &str = "https://brasilapi.com.br";

/// The public URL for an area code, shown to users so they can check the
/// service themselves when a lookup fails.
pub fn public_area_code_url(ddd: Ddd) -> String {
    format!("{DEFAULT_BASE_URL}/api/ddd/v1/{ddd}")
}

/// Configuration for the BrasilAPI client.
#[derive(Debug, Clone)]
pub struct BrasilApiConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl BrasilApiConfig {
    /// Create a config pointing at the public service.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for BrasilApiConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the BrasilAPI area-code service.
#[derive(Debug, Clone)]
pub struct BrasilApiClient {
    http: reqwest::Client,
    base_url: reqwest::Url,
}

impl BrasilApiClient {
    /// Create a new BrasilAPI client.
    pub fn new(config: BrasilApiConfig) -> Result<Self, LookupError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        // Always go to the origin; caching is ours to do.
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));
        headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));

        Ok(Self {
            http: build_http(config.timeout_secs, headers)?,
            base_url: parse_base_url(&config.base_url)?,
        })
    }
}

#[async_trait]
impl AreaCodeSource for BrasilApiClient {
    #[tracing::instrument(skip_all, fields(ddd = %ddd))]
    async fn area_code(&self, ddd: Ddd) -> Result<AreaCodeInfo, LookupError> {
        let code = ddd.to_string();
        let url = with_segments(&self.base_url, ["api", "ddd", "v1", code.as_str()]);
        tracing::debug!(%url, "fetching area code");

        let body = fetch_text(self.http.get(url), Upstream::BrasilApi).await?;
        decode(&body, Upstream::BrasilApi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = BrasilApiConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn config_with_base_url() {
        let config = BrasilApiConfig::new().with_base_url("http://localhost:9000");
        assert_eq!(config.base_url, "http://localhost:9000");
    }

    #[test]
    fn client_creation() {
        assert!(BrasilApiClient::new(BrasilApiConfig::default()).is_ok());
    }

    #[test]
    fn public_url() {
        let ddd = Ddd::parse("34").unwrap();
        assert_eq!(
            public_area_code_url(ddd),
            "https://brasilapi.com.br/api/ddd/v1/34"
        );
    }
}
