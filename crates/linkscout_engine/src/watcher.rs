use std::sync::Arc;
use std::time::Instant;

use linkscout_core::{
    extract_urls, normalize_url, shortened_reply, title_message, CooloffGate, ShortenCommand,
    WatcherConfig, SHORTEN_FAILED, SHORTEN_USAGE,
};
use scout_logging::{scout_debug, scout_info, scout_warn};

use crate::fetch::{FetchSettings, ReqwestTitleFetcher, TitleFetcher};
use crate::hooks::HookRegistry;
use crate::shorten::{HttpShortener, Shortener};
use crate::FailureKind;

/// Outbound send primitive provided by the chat host.
pub trait MessageSink: Send + Sync {
    fn send(&self, channel: &str, text: &str);
}

/// What happened to one candidate URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateOutcome {
    /// Same URL seen within the cooloff window.
    CooledOff { url: String },
    /// A hook took over the response.
    Claimed { url: String },
    /// Nobody claimed it and generic handling is turned off.
    Unhandled { url: String },
    Failed { url: String, kind: FailureKind },
    Reported { url: String, message: String },
}

/// Watches chat text for links and reports page titles.
///
/// One watcher owns the single cooloff slot for the whole process.
pub struct LinkWatcher {
    config: WatcherConfig,
    gate: CooloffGate,
    hooks: HookRegistry,
    fetcher: Arc<dyn TitleFetcher>,
    shortener: Arc<dyn Shortener>,
}

impl LinkWatcher {
    pub fn new(config: WatcherConfig) -> Self {
        let fetcher = Arc::new(ReqwestTitleFetcher::new(FetchSettings::from_config(&config)));
        let shortener = Arc::new(HttpShortener::from_config(&config));
        Self {
            gate: CooloffGate::new(config.cooloff_window()),
            hooks: HookRegistry::new(),
            fetcher,
            shortener,
            config,
        }
    }

    pub fn with_fetcher(mut self, fetcher: Arc<dyn TitleFetcher>) -> Self {
        self.fetcher = fetcher;
        self
    }

    pub fn with_shortener(mut self, shortener: Arc<dyn Shortener>) -> Self {
        self.shortener = shortener;
        self
    }

    pub fn config(&self) -> &WatcherConfig {
        &self.config
    }

    pub fn hooks(&self) -> &HookRegistry {
        &self.hooks
    }

    pub fn gate(&self) -> &CooloffGate {
        &self.gate
    }

    /// Processes every URL candidate in `text`, one after another in order
    /// of appearance. A failure on one candidate never stops the next.
    pub async fn handle_message(
        &self,
        channel: &str,
        user: &str,
        text: &str,
        sink: &dyn MessageSink,
    ) -> Vec<CandidateOutcome> {
        let candidates = extract_urls(text);
        if candidates.is_empty() {
            return Vec::new();
        }
        scout_debug!(
            "{} candidate url(s) from {} in {}",
            candidates.len(),
            user,
            channel
        );

        let mut outcomes = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            let url = normalize_url(&candidate);
            outcomes.push(self.process_candidate(channel, url, sink).await);
        }
        outcomes
    }

    async fn process_candidate(
        &self,
        channel: &str,
        url: String,
        sink: &dyn MessageSink,
    ) -> CandidateOutcome {
        if !self.gate.should_process(&url, Instant::now()) {
            scout_debug!("Skipping {} (cooloff)", url);
            return CandidateOutcome::CooledOff { url };
        }

        if self.hooks.dispatch(channel, &url).await {
            return CandidateOutcome::Claimed { url };
        }
        if !self.config.generic_handler_enabled {
            return CandidateOutcome::Unhandled { url };
        }

        let result = match self.fetcher.fetch(&url).await {
            Ok(result) => result,
            Err(err) => {
                if err.kind.is_network() {
                    scout_warn!("Unable to load URL {}: {}", url, err);
                } else {
                    scout_debug!("No title for {}: {}", url, err);
                }
                return CandidateOutcome::Failed {
                    url,
                    kind: err.kind,
                };
            }
        };

        let short_url = if self.config.shorten_links {
            match self.shortener.shorten(&url).await {
                Ok(short_url) => Some(short_url),
                Err(err) => {
                    scout_warn!("Unable to shorten URL {}: {}", url, err);
                    None
                }
            }
        } else {
            None
        };

        let message = title_message(&result.title, short_url.as_deref());
        scout_info!("Reporting title for {} in {}", url, channel);
        sink.send(channel, &message);
        CandidateOutcome::Reported { url, message }
    }

    /// Handles `.shorten <url>`; `line` is the full command line.
    pub async fn shorten_command(&self, channel: &str, line: &str, sink: &dyn MessageSink) {
        let url = match ShortenCommand::parse(line) {
            ShortenCommand::Usage => {
                sink.send(channel, SHORTEN_USAGE);
                return;
            }
            ShortenCommand::Shorten { url } => url,
        };

        match self.shortener.shorten(&url).await {
            Ok(short_url) => sink.send(channel, &shortened_reply(&short_url)),
            Err(err) => {
                scout_warn!("Unable to shorten URL {}: {}", url, err);
                sink.send(channel, SHORTEN_FAILED);
            }
        }
    }
}
