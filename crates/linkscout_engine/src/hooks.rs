use std::panic::AssertUnwindSafe;
use std::sync::{Arc, PoisonError, RwLock};

use futures_util::FutureExt;
use scout_logging::{scout_debug, scout_error, scout_warn};

/// Event name collaborators subscribe to for URL interception.
pub const URL_DETECTION_EVENT: &str = "urls.detection";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum HookError {
    #[error("hook failed: {0}")]
    Failed(String),
}

/// A collaborator that may take over the response for a URL.
///
/// Returning `Ok(true)` claims the URL: the generic title lookup is skipped
/// for it. Errors are logged and count as "not claimed".
#[async_trait::async_trait]
pub trait UrlHook: Send + Sync {
    async fn on_url(&self, channel: &str, url: &str) -> Result<bool, HookError>;
}

/// Adapts a synchronous closure into a [`UrlHook`].
pub struct FnHook<F> {
    func: F,
}

impl<F> FnHook<F>
where
    F: Fn(&str, &str) -> Result<bool, HookError> + Send + Sync,
{
    pub fn new(func: F) -> Self {
        Self { func }
    }
}

#[async_trait::async_trait]
impl<F> UrlHook for FnHook<F>
where
    F: Fn(&str, &str) -> Result<bool, HookError> + Send + Sync,
{
    async fn on_url(&self, channel: &str, url: &str) -> Result<bool, HookError> {
        (self.func)(channel, url)
    }
}

#[derive(Clone)]
struct RegisteredHook {
    name: String,
    hook: Arc<dyn UrlHook>,
}

/// Ordered set of URL hooks for the `urls.detection` event.
#[derive(Default)]
pub struct HookRegistry {
    hooks: RwLock<Vec<RegisteredHook>>,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `hook`; hooks run in registration order.
    pub fn register(&self, name: impl Into<String>, hook: Arc<dyn UrlHook>) {
        let name = name.into();
        scout_debug!("Registering {} hook {}", URL_DETECTION_EVENT, name);
        self.hooks
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(RegisteredHook { name, hook });
    }

    /// Removes every hook registered under `name`. Returns whether any was.
    pub fn remove(&self, name: &str) -> bool {
        let mut hooks = self.hooks.write().unwrap_or_else(PoisonError::into_inner);
        let before = hooks.len();
        hooks.retain(|entry| entry.name != name);
        hooks.len() != before
    }

    pub fn len(&self) -> usize {
        self.hooks
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Runs every hook for `url` and ORs their claims.
    ///
    /// All hooks run even after one has claimed, since they are invoked for
    /// their side effects. A hook that errors or panics is treated as not
    /// claiming and does not affect the others.
    pub async fn dispatch(&self, channel: &str, url: &str) -> bool {
        let hooks = self
            .hooks
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        let mut claimed = false;
        for entry in hooks {
            let outcome = AssertUnwindSafe(entry.hook.on_url(channel, url))
                .catch_unwind()
                .await;
            match outcome {
                Ok(Ok(true)) => {
                    scout_debug!("Hook {} claimed {} in {}", entry.name, url, channel);
                    claimed = true;
                }
                Ok(Ok(false)) => {}
                Ok(Err(err)) => {
                    scout_warn!("Hook {} failed for {}: {}", entry.name, url, err);
                }
                Err(_) => {
                    scout_error!("Hook {} panicked while handling {}", entry.name, url);
                }
            }
        }
        claimed
    }
}
