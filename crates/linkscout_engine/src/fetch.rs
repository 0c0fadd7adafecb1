use std::time::Duration;

use futures_util::StreamExt;
use linkscout_core::{WatcherConfig, DEFAULT_READ_BYTES, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
use reqwest::header::CONTENT_TYPE;
use scout_logging::scout_trace;

use crate::decode::decode_html;
use crate::title::{find_title, sanitize_title};
use crate::{FailureKind, FetchError, TitleResult};

#[derive(Debug, Clone)]
pub struct FetchSettings {
    /// Wall-clock budget for the whole request, body included.
    pub timeout: Duration,
    /// Body bytes read before giving up on finding a title.
    pub max_bytes: u64,
    pub user_agent: String,
    pub allowed_content_types: Vec<String>,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_bytes: DEFAULT_READ_BYTES,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            allowed_content_types: vec!["text/html".to_string(), "text/xhtml".to_string()],
        }
    }
}

impl FetchSettings {
    pub fn from_config(config: &WatcherConfig) -> Self {
        Self {
            timeout: config.fetch_timeout(),
            max_bytes: config.max_response_bytes,
            user_agent: config.user_agent.clone(),
            ..Self::default()
        }
    }
}

#[async_trait::async_trait]
pub trait TitleFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<TitleResult, FetchError>;
}

/// Single-attempt title lookup over HTTP.
#[derive(Debug, Clone)]
pub struct ReqwestTitleFetcher {
    settings: FetchSettings,
}

impl ReqwestTitleFetcher {
    pub fn new(settings: FetchSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &FetchSettings {
        &self.settings
    }

    fn build_client(&self) -> Result<reqwest::Client, FetchError> {
        reqwest::Client::builder()
            .timeout(self.settings.timeout)
            .user_agent(self.settings.user_agent.as_str())
            .build()
            .map_err(|err| FetchError::new(FailureKind::Other, err.to_string()))
    }

    fn is_content_type_allowed(&self, content_type: &str) -> bool {
        let ct = content_type.split(';').next().unwrap_or(content_type).trim();
        self.settings
            .allowed_content_types
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(ct))
    }

    fn byte_budget(&self) -> usize {
        usize::try_from(self.settings.max_bytes).unwrap_or(usize::MAX)
    }
}

#[async_trait::async_trait]
impl TitleFetcher for ReqwestTitleFetcher {
    async fn fetch(&self, url: &str) -> Result<TitleResult, FetchError> {
        let parsed = reqwest::Url::parse(url)
            .map_err(|err| FetchError::new(FailureKind::Other, format!("invalid url: {err}")))?;
        let client = self.build_client()?;

        let response = client
            .get(parsed)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let final_url = response.url().to_string();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string())
            .unwrap_or_default();

        if !self.is_content_type_allowed(&content_type) {
            return Err(FetchError::new(
                FailureKind::UnsupportedContentType { content_type },
                "not an html page",
            ));
        }

        let budget = self.byte_budget();
        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while bytes.len() < budget {
            let Some(chunk) = stream.next().await else {
                break;
            };
            let chunk = chunk.map_err(map_reqwest_error)?;
            let take = chunk.len().min(budget - bytes.len());
            bytes.extend_from_slice(&chunk[..take]);
        }
        scout_trace!("Read {} body bytes from {}", bytes.len(), url);

        let decoded = decode_html(&bytes, Some(&content_type));
        let raw_title = find_title(&decoded.html)
            .ok_or_else(|| FetchError::new(FailureKind::NoTitleFound, "no <title> element"))?;

        Ok(TitleResult {
            raw_title: raw_title.to_string(),
            title: sanitize_title(raw_title),
            source_url: url.to_string(),
            final_url,
        })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_builder() || err.is_redirect() {
        return FetchError::new(FailureKind::Other, err.to_string());
    }
    FetchError::new(FailureKind::ConnectionFailure, err.to_string())
}
