use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use linkscout_core::{CooloffGate, CooloffState};

const WINDOW: Duration = Duration::from_secs(10);

#[test]
fn same_url_inside_window_is_suppressed() {
    let gate = CooloffGate::new(WINDOW);
    let t1 = Instant::now();
    let t2 = t1 + Duration::from_secs(3);

    assert!(gate.should_process("http://example.com", t1));
    assert!(!gate.should_process("http://example.com", t2));
}

#[test]
fn same_url_after_window_is_processed() {
    let gate = CooloffGate::new(WINDOW);
    let t1 = Instant::now();

    assert!(gate.should_process("http://example.com", t1));
    assert!(gate.should_process("http://example.com", t1 + WINDOW));
}

#[test]
fn suppressed_call_does_not_extend_window() {
    let gate = CooloffGate::new(WINDOW);
    let t0 = Instant::now();

    assert!(gate.should_process("http://example.com", t0));
    assert!(!gate.should_process("http://example.com", t0 + Duration::from_secs(9)));
    assert!(gate.should_process("http://example.com", t0 + Duration::from_secs(10)));
}

#[test]
fn alternating_urls_defeat_single_slot() {
    let gate = CooloffGate::new(WINDOW);
    let t = Instant::now();

    assert!(gate.should_process("http://a.example.com", t));
    assert!(gate.should_process("http://b.example.com", t));
    assert!(gate.should_process("http://a.example.com", t));
}

#[test]
fn passing_url_overwrites_state() {
    let gate = CooloffGate::new(WINDOW);
    let t = Instant::now();

    assert!(gate.should_process("http://a.example.com", t));
    let snapshot = gate.snapshot();
    assert_eq!(snapshot.last_url.as_deref(), Some("http://a.example.com"));
    assert_eq!(snapshot.last_seen_at, Some(t));
}

#[test]
fn comparison_is_exact() {
    let gate = CooloffGate::new(WINDOW);
    let t = Instant::now();

    assert!(gate.should_process("http://example.com", t));
    assert!(gate.should_process("http://example.com/", t));
    assert!(gate.should_process("http://EXAMPLE.com/", t));
}

#[test]
fn zero_window_never_suppresses() {
    let gate = CooloffGate::new(Duration::ZERO);
    let t = Instant::now();

    assert!(gate.should_process("http://example.com", t));
    assert!(gate.should_process("http://example.com", t));
}

#[test]
fn state_transition_is_pure() {
    let mut state = CooloffState::new();
    let t = Instant::now();

    assert!(state.check_and_record("http://example.com", t, WINDOW));
    let recorded = state.clone();
    assert!(!state.check_and_record("http://example.com", t, WINDOW));
    assert_eq!(state, recorded);
}

#[test]
fn concurrent_checks_admit_exactly_one() {
    let gate = Arc::new(CooloffGate::new(WINDOW));
    let now = Instant::now();

    let admitted = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let gate = gate.clone();
                scope.spawn(move || gate.should_process("http://example.com", now))
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .filter(|admitted| *admitted)
            .count()
    });

    assert_eq!(admitted, 1);
}
