//! wttr.in weather client
//!
//! HTTP client for wttr.in-style JSON weather providers.

use domain::WeatherQuery;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};
use url::Url;

use crate::models::{self, WttrResponse};

/// Weather client errors
#[derive(Debug, Error)]
pub enum WttrError {
    /// Connection to the weather provider failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Provider answered with a non-success status
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse the provider's response body
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Provider payload carried no current-condition records
    #[error("Provider response contained no current conditions")]
    EmptyResponse,
}

/// Weather provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WttrConfig {
    /// Provider base URL (default: <https://wttr.in>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://wttr.in".to_string()
}

const fn default_timeout() -> u64 {
    10
}

impl Default for WttrConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// wttr.in HTTP client
///
/// Deliberately not resilience-hardened: no retries, no response caching, no
/// backoff. The only knob is the request timeout from [`WttrConfig`].
#[derive(Debug, Clone)]
pub struct WttrClient {
    client: Client,
    base: Url,
}

impl WttrClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client cannot
    /// be initialized.
    pub fn new(config: &WttrConfig) -> Result<Self, WttrError> {
        let base = Url::parse(&config.base_url)
            .map_err(|e| WttrError::ConnectionFailed(format!("invalid base URL: {e}")))?;

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WttrError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, base })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, WttrError> {
        Self::new(&WttrConfig::default())
    }

    /// Build the provider URL for a query
    ///
    /// City names become a single percent-encoded path segment; coordinates
    /// become a literal `<lat>,<lon>` segment. Both request JSON output via
    /// `?format=j1`.
    fn request_url(&self, query: &WeatherQuery) -> Result<Url, WttrError> {
        let segment = match query {
            WeatherQuery::City(city) => city.as_str().to_owned(),
            WeatherQuery::Coordinates(location) => {
                format!("{},{}", location.latitude(), location.longitude())
            }
        };

        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| WttrError::ConnectionFailed("base URL cannot be a base".to_string()))?
            .pop_if_empty()
            .push(&segment);
        url.set_query(Some("format=j1"));

        Ok(url)
    }

    /// Fetch the raw provider payload for a query
    ///
    /// # Errors
    ///
    /// `ConnectionFailed` for network-level failures, `RequestFailed` for
    /// non-success statuses, `ParseError` for bodies that do not bind to the
    /// wttr.in JSON shape.
    #[instrument(skip(self), fields(query = %query))]
    pub async fn fetch(&self, query: &WeatherQuery) -> Result<WttrResponse, WttrError> {
        let url = self.request_url(query)?;
        debug!(url = %url, "Fetching weather from provider");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| WttrError::ConnectionFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(WttrError::RequestFailed(format!("HTTP {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| WttrError::ConnectionFailed(e.to_string()))?;

        models::decode(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{CityName, GeoLocation};

    fn client() -> WttrClient {
        WttrClient::with_defaults().expect("client creation should succeed")
    }

    #[test]
    fn config_defaults() {
        let config = WttrConfig::default();
        assert_eq!(config.base_url, "https://wttr.in");
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn config_serde_defaults_apply() {
        let config: WttrConfig = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(config.base_url, "https://wttr.in");
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn rejects_invalid_base_url() {
        let config = WttrConfig {
            base_url: "not a url".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            WttrClient::new(&config),
            Err(WttrError::ConnectionFailed(_))
        ));
    }

    #[test]
    fn city_url_is_single_encoded_segment() {
        let query = WeatherQuery::City(CityName::new("New York").expect("valid"));
        let url = client().request_url(&query).expect("url");
        assert_eq!(url.as_str(), "https://wttr.in/New%20York?format=j1");
    }

    #[test]
    fn city_url_encoding_round_trips() {
        let original = "São Paulo / Centro?";
        let query = WeatherQuery::City(CityName::new(original).expect("valid"));
        let url = client().request_url(&query).expect("url");

        let decoded: Vec<String> = url
            .path_segments()
            .expect("path segments")
            .map(|s| {
                percent_decode(s)
            })
            .collect();
        assert_eq!(decoded, vec![original.to_string()]);
    }

    #[test]
    fn coordinate_url_uses_comma_pair() {
        let location = GeoLocation::new(48.85, 2.35).expect("valid");
        let query = WeatherQuery::Coordinates(location);
        let url = client().request_url(&query).expect("url");
        assert_eq!(url.as_str(), "https://wttr.in/48.85,2.35?format=j1");
    }

    #[test]
    fn trailing_slash_base_produces_clean_path() {
        let config = WttrConfig {
            base_url: "https://wttr.in/".to_string(),
            ..Default::default()
        };
        let client = WttrClient::new(&config).expect("client");
        let query = WeatherQuery::City(CityName::new("Oslo").expect("valid"));
        let url = client.request_url(&query).expect("url");
        assert_eq!(url.path(), "/Oslo");
    }

    fn percent_decode(segment: &str) -> String {
        // Minimal decoder for test assertions only
        let mut out = Vec::new();
        let bytes = segment.as_bytes();
        let mut i = 0;
        while i < bytes.len() {
            if bytes[i] == b'%' && i + 2 < bytes.len() {
                let hex = std::str::from_utf8(&bytes[i + 1..i + 3]).expect("utf8");
                out.push(u8::from_str_radix(hex, 16).expect("hex"));
                i += 3;
            } else {
                out.push(bytes[i]);
                i += 1;
            }
        }
        String::from_utf8(out).expect("utf8")
    }
}
