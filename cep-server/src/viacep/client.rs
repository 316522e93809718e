//! ViaCEP HTTP client.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde_json::Value;

use crate::domain::{Cep, Uf};
use crate::lookup::http::{build_http, decode, fetch_text, parse_base_url, with_segments};
use crate::lookup::{Address, AddressSource, LookupError, Upstream};

/// Default base URL for ViaCEP.
const DEFAULT_BASE_URL: &str = "https://viacep.com.br";

/// Configuration for the ViaCEP client.
#[derive(Debug, Clone)]
pub struct ViaCepConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl ViaCepConfig {
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

impl Default for ViaCepConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the ViaCEP postal-code service.
#[derive(Debug, Clone)]
pub struct ViaCepClient {
    http: reqwest::Client,
    base_url: reqwest::Url,
}

impl ViaCepClient {
    /// Create a new ViaCEP client.
    pub fn new(config: ViaCepConfig) -> Result<Self, LookupError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        Ok(Self {
            http: build_http(config.timeout_secs, headers)?,
            base_url: parse_base_url(&config.base_url)?,
        })
    }
}

/// Whether a response object is the service's not-found sentinel.
///
/// The service has sent both `"erro": true` and `"erro": "true"`.
fn is_not_found(value: &Value) -> bool {
    match value.get("erro") {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => s.eq_ignore_ascii_case("true"),
        _ => false,
    }
}

#[async_trait]
impl AddressSource for ViaCepClient {
    #[tracing::instrument(skip_all, fields(cep = %cep))]
    async fn address_by_cep(&self, cep: &Cep) -> Result<Option<Address>, LookupError> {
        let url = with_segments(&self.base_url, ["ws", cep.as_str(), "json", ""]);
        tracing::debug!(%url, "looking up postal code");

        let body = fetch_text(self.http.get(url), Upstream::ViaCep).await?;
        let value: Value = decode(&body, Upstream::ViaCep)?;

        if is_not_found(&value) {
            return Ok(None);
        }

        serde_json::from_value(value)
            .map(Some)
            .map_err(|e| LookupError::Decode {
                upstream: Upstream::ViaCep,
                message: e.to_string(),
            })
    }

    #[tracing::instrument(skip_all, fields(uf = %uf, city = %city, street = %street))]
    async fn addresses_by_street(
        &self,
        uf: Uf,
        city: &str,
        street: &str,
    ) -> Result<Vec<Address>, LookupError> {
        let url = with_segments(
            &self.base_url,
            ["ws", uf.as_str(), city, street, "json", ""],
        );
        tracing::debug!(%url, "searching addresses");

        let body = fetch_text(self.http.get(url), Upstream::ViaCep).await?;
        let value: Value = decode(&body, Upstream::ViaCep)?;

        // Anything but an array (the sentinel included) means no results.
        if !value.is_array() {
            return Ok(Vec::new());
        }

        serde_json::from_value(value).map_err(|e| LookupError::Decode {
            upstream: Upstream::ViaCep,
            message: e.to_string(),
        })
    }
}
