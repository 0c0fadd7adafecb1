use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

/// The single most recent URL considered, and when.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CooloffState {
    pub last_url: Option<String>,
    pub last_seen_at: Option<Instant>,
}

impl CooloffState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pure transition: returns whether `url` may be processed at `now` and
    /// records it when it may.
    pub fn check_and_record(&mut self, url: &str, now: Instant, window: Duration) -> bool {
        if self.suppresses(url, now, window) {
            return false;
        }
        self.last_url = Some(url.to_string());
        self.last_seen_at = Some(now);
        true
    }

    fn suppresses(&self, url: &str, now: Instant, window: Duration) -> bool {
        match (self.last_url.as_deref(), self.last_seen_at) {
            (Some(last_url), Some(last_seen_at)) if last_url == url => {
                now.saturating_duration_since(last_seen_at) < window
            }
            _ => false,
        }
    }
}

/// Single-slot duplicate suppression shared by every channel.
///
/// Only the most recent URL is remembered, so alternating between two URLs
/// never suppresses anything. The slot is global rather than per channel: a
/// link posted in one channel suppresses the same link in another channel
/// for the rest of the window.
#[derive(Debug)]
pub struct CooloffGate {
    window: Duration,
    state: Mutex<CooloffState>,
}

impl CooloffGate {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            state: Mutex::new(CooloffState::new()),
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Returns `false` iff `url` equals the recorded URL and less than the
    /// window has elapsed; otherwise records `(url, now)` and returns `true`.
    ///
    /// The check and the overwrite happen under one lock.
    pub fn should_process(&self, url: &str, now: Instant) -> bool {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.check_and_record(url, now, self.window)
    }

    pub fn snapshot(&self) -> CooloffState {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
