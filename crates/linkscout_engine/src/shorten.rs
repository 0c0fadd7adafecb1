use std::time::Duration;

use linkscout_core::WatcherConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ShortenError {
    #[error("no API key provided for URL shortening")]
    MissingApiKey,
    #[error("shortener request failed: {0}")]
    Request(String),
    #[error("shortener returned status {0}")]
    HttpStatus(u16),
    #[error("malformed shortener response: {0}")]
    MalformedResponse(String),
}

#[async_trait::async_trait]
pub trait Shortener: Send + Sync {
    async fn shorten(&self, url: &str) -> Result<String, ShortenError>;
}

#[derive(Debug, Serialize)]
struct ShortenRequest<'a> {
    url: &'a str,
    token: &'a str,
}

#[derive(Debug, Deserialize)]
struct ShortenResponse {
    url: String,
}

/// Client for a crdnl.xyz-style link shortener: POST `{url, token}` as JSON,
/// read `url` back.
#[derive(Debug, Clone)]
pub struct HttpShortener {
    endpoint: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl HttpShortener {
    pub fn new(endpoint: impl Into<String>, api_key: Option<String>, timeout: Duration) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key,
            timeout,
        }
    }

    pub fn from_config(config: &WatcherConfig) -> Self {
        Self::new(
            config.shortener_endpoint.clone(),
            config.shortener_api_key.clone(),
            config.fetch_timeout(),
        )
    }
}

#[async_trait::async_trait]
impl Shortener for HttpShortener {
    async fn shorten(&self, url: &str) -> Result<String, ShortenError> {
        let token = self
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(ShortenError::MissingApiKey)?;

        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|err| ShortenError::Request(err.to_string()))?;

        let response = client
            .post(self.endpoint.as_str())
            .json(&ShortenRequest { url, token })
            .send()
            .await
            .map_err(|err| ShortenError::Request(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ShortenError::HttpStatus(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| ShortenError::Request(err.to_string()))?;
        let parsed: ShortenResponse = serde_json::from_slice(&body)
            .map_err(|err| ShortenError::MalformedResponse(err.to_string()))?;
        Ok(parsed.url)
    }
}
