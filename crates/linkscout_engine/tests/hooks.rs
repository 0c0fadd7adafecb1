use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use linkscout_engine::{FnHook, HookError, HookRegistry, UrlHook};

struct PanickingHook;

#[async_trait::async_trait]
impl UrlHook for PanickingHook {
    async fn on_url(&self, _channel: &str, _url: &str) -> Result<bool, HookError> {
        panic!("previewer blew up");
    }
}

fn counting_hook(counter: Arc<AtomicUsize>, claim: bool) -> Arc<dyn UrlHook> {
    Arc::new(FnHook::new(move |_channel: &str, _url: &str| {
        counter.fetch_add(1, Ordering::SeqCst);
        Ok(claim)
    }))
}

#[tokio::test]
async fn empty_registry_claims_nothing() {
    let registry = HookRegistry::new();
    assert!(registry.is_empty());
    assert!(!registry.dispatch("#rust", "http://example.com").await);
}

#[tokio::test]
async fn any_claim_wins_and_every_hook_runs() {
    let registry = HookRegistry::new();
    let first = Arc::new(AtomicUsize::new(0));
    let second = Arc::new(AtomicUsize::new(0));
    registry.register("claimer", counting_hook(first.clone(), true));
    registry.register("observer", counting_hook(second.clone(), false));

    assert!(registry.dispatch("#rust", "http://example.com/video").await);
    assert_eq!(first.load(Ordering::SeqCst), 1);
    assert_eq!(second.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn hooks_run_in_registration_order_with_arguments() {
    let registry = HookRegistry::new();
    let calls = Arc::new(Mutex::new(Vec::new()));
    for name in ["a", "b", "c"] {
        let calls = calls.clone();
        registry.register(
            name,
            Arc::new(FnHook::new(move |channel: &str, url: &str| {
                calls
                    .lock()
                    .unwrap()
                    .push(format!("{name}:{channel}:{url}"));
                Ok(false)
            })),
        );
    }

    assert!(!registry.dispatch("#chan", "http://x.io/").await);
    assert_eq!(
        *calls.lock().unwrap(),
        vec![
            "a:#chan:http://x.io/".to_string(),
            "b:#chan:http://x.io/".to_string(),
            "c:#chan:http://x.io/".to_string(),
        ]
    );
}

#[tokio::test]
async fn failing_and_panicking_hooks_are_isolated() {
    let registry = HookRegistry::new();
    let later = Arc::new(AtomicUsize::new(0));
    registry.register(
        "broken",
        Arc::new(FnHook::new(|_: &str, _: &str| {
            Err(HookError::Failed("upstream down".to_string()))
        })),
    );
    registry.register("panics", Arc::new(PanickingHook));
    registry.register("later", counting_hook(later.clone(), false));

    assert!(!registry.dispatch("#rust", "http://example.com").await);
    assert_eq!(later.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn removed_hooks_no_longer_claim() {
    let registry = HookRegistry::new();
    let counter = Arc::new(AtomicUsize::new(0));
    registry.register("claimer", counting_hook(counter.clone(), true));
    assert_eq!(registry.len(), 1);

    assert!(registry.remove("claimer"));
    assert!(!registry.remove("claimer"));
    assert!(!registry.dispatch("#rust", "http://example.com").await);
    assert_eq!(counter.load(Ordering::SeqCst), 0);
}
