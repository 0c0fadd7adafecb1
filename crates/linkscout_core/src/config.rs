use std::time::Duration;

use serde::Deserialize;

pub const DEFAULT_TIMEOUT_SECS: u64 = 5;
/// 512 KiB.
pub const DEFAULT_READ_BYTES: u64 = 524_288;
pub const DEFAULT_COOLOFF_SECS: u64 = 10;
pub const DEFAULT_SHORTENER_ENDPOINT: &str = "https://crdnl.xyz/add";
/// Browser-like agent string; some sites reject obvious bots.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 6.2; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/32.0.1667.0 Safari/537.36";

/// Watcher configuration. Every key is optional; missing keys take the
/// defaults above. Loaded once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WatcherConfig {
    #[serde(rename = "timeout")]
    pub fetch_timeout_secs: u64,
    #[serde(rename = "read_bytes")]
    pub max_response_bytes: u64,
    #[serde(rename = "lookup_cooloff")]
    pub cooloff_secs: u64,
    pub shorten_links: bool,
    #[serde(rename = "crdnlxyz_api_key")]
    pub shortener_api_key: Option<String>,
    #[serde(rename = "handle_generic_urls")]
    pub generic_handler_enabled: bool,
    pub shortener_endpoint: String,
    pub user_agent: String,
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self {
            fetch_timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_response_bytes: DEFAULT_READ_BYTES,
            cooloff_secs: DEFAULT_COOLOFF_SECS,
            shorten_links: false,
            shortener_api_key: None,
            generic_handler_enabled: true,
            shortener_endpoint: DEFAULT_SHORTENER_ENDPOINT.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl WatcherConfig {
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    pub fn cooloff_window(&self) -> Duration {
        Duration::from_secs(self.cooloff_secs)
    }
}
