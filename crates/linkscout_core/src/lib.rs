//! Linkscout core: pure URL extraction, cooloff bookkeeping and message
//! formatting. No IO lives here.
mod config;
mod cooloff;
mod extract;
mod message;

pub use config::{
    WatcherConfig, DEFAULT_COOLOFF_SECS, DEFAULT_READ_BYTES, DEFAULT_SHORTENER_ENDPOINT,
    DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};
pub use cooloff::{CooloffGate, CooloffState};
pub use extract::{extract_urls, normalize_url, strip_trailing_control};
pub use message::{shortened_reply, title_message, ShortenCommand, SHORTEN_FAILED, SHORTEN_USAGE};
