//! Linkscout engine: page title lookup, URL hooks, link shortening and the
//! per-message pipeline tying them together.
mod decode;
mod engine;
mod fetch;
mod hooks;
mod shorten;
mod title;
mod types;
mod watcher;

pub use decode::{decode_html, DecodedHtml};
pub use engine::{InboundMessage, WatcherEvent, WatcherHandle};
pub use fetch::{FetchSettings, ReqwestTitleFetcher, TitleFetcher};
pub use hooks::{FnHook, HookError, HookRegistry, UrlHook, URL_DETECTION_EVENT};
pub use shorten::{HttpShortener, ShortenError, Shortener};
pub use title::{find_title, sanitize_title, MAX_TITLE_CHARS};
pub use types::{FailureKind, FetchError, TitleResult};
pub use watcher::{CandidateOutcome, LinkWatcher, MessageSink};
