//! Response handling shared by the service clients.

use serde::de::DeserializeOwned;

use super::error::{LookupError, Upstream};

/// Send a request and return the body of a success response.
///
/// A non-success status becomes `LookupError::Service` carrying the status
/// and whatever body the service sent; a transport failure becomes
/// `LookupError::Network`.
pub(crate) async fn fetch_text(
    request: reqwest::RequestBuilder,
    upstream: Upstream,
) -> Result<String, LookupError> {
    let response = request
        .send()
        .await
        .map_err(|e| LookupError::network(upstream, &e))?;

    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(LookupError::Service {
            upstream,
            status: status.as_u16(),
            body,
        });
    }

    response
        .text()
        .await
        .map_err(|e| LookupError::network(upstream, &e))
}

/// Parse a JSON body, logging a prefix of it on failure.
pub(crate) fn decode<T: DeserializeOwned>(body: &str, upstream: Upstream) -> Result<T, LookupError> {
    serde_json::from_str(body).map_err(|e| {
        let snippet: String = body.chars().take(500).collect();
        tracing::debug!(%upstream, body = %snippet, "undecodable response body");
        LookupError::Decode {
            upstream,
            message: e.to_string(),
        }
    })
}

/// Build an HTTP client with the given timeout.
pub(crate) fn build_http(
    timeout_secs: u64,
    headers: reqwest::header::HeaderMap,
) -> Result<reqwest::Client, LookupError> {
    reqwest::Client::builder()
        .default_headers(headers)
        .timeout(std::time::Duration::from_secs(timeout_secs))
        .build()
        .map_err(|e| LookupError::Config(e.to_string()))
}

/// Parse a base URL, rejecting ones that cannot take path segments.
pub(crate) fn parse_base_url(base_url: &str) -> Result<reqwest::Url, LookupError> {
    let url = reqwest::Url::parse(base_url)
        .map_err(|e| LookupError::Config(format!("base URL {base_url:?}: {e}")))?;
    if url.cannot_be_a_base() {
        return Err(LookupError::Config(format!(
            "base URL {base_url:?} cannot take a path"
        )));
    }
    Ok(url)
}

/// Append path segments to a base URL. Each segment is percent-encoded, so
/// spaces, accents and slashes inside a city or street name stay in their
/// own segment.
pub(crate) fn with_segments<'a>(
    base: &reqwest::Url,
    segments: impl IntoIterator<Item = &'a str>,
) -> reqwest::Url {
    let mut url = base.clone();
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url
}
