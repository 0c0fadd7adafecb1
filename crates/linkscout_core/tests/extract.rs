use std::sync::Once;

use linkscout_core::{extract_urls, normalize_url};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(scout_logging::initialize_for_tests);
}

#[test]
fn trailing_exclamation_is_not_part_of_url() {
    init_logging();
    assert_eq!(
        extract_urls("check this out http://example.com/page!"),
        vec!["http://example.com/page".to_string()]
    );
}

#[test]
fn urls_come_back_in_order_of_appearance() {
    init_logging();
    let urls = extract_urls("see example.com and https://rust-lang.org/learn.");
    assert_eq!(
        urls,
        vec![
            "example.com".to_string(),
            "https://rust-lang.org/learn".to_string()
        ]
    );
}

#[test]
fn balanced_parentheses_stay_in_path() {
    init_logging();
    let urls = extract_urls("read http://en.wikipedia.org/wiki/Rust_(programming_language).");
    assert_eq!(
        urls,
        vec!["http://en.wikipedia.org/wiki/Rust_(programming_language)".to_string()]
    );
}

#[test]
fn candidate_may_follow_formatting_control_byte() {
    init_logging();
    let urls = extract_urls("\u{2}example.com/foo\u{2} bold link");
    assert_eq!(urls, vec!["example.com/foo".to_string()]);
}

#[test]
fn information_separators_end_a_candidate() {
    init_logging();
    assert_eq!(
        extract_urls("a.com\u{1c}b.com"),
        vec!["a.com".to_string(), "b.com".to_string()]
    );
    assert_eq!(
        extract_urls("example.com/a\u{1f}b c"),
        vec!["example.com/a".to_string()]
    );
}

#[test]
fn candidate_at_start_of_text() {
    init_logging();
    assert_eq!(
        extract_urls("https://docs.rs/regex is handy"),
        vec!["https://docs.rs/regex".to_string()]
    );
}

#[test]
fn matching_ignores_case() {
    init_logging();
    assert_eq!(
        extract_urls("Visit WWW.EXAMPLE.COM today"),
        vec!["WWW.EXAMPLE.COM".to_string()]
    );
    assert_eq!(
        extract_urls("HTTPS://Example.org/Path"),
        vec!["HTTPS://Example.org/Path".to_string()]
    );
}

#[test]
fn text_without_urls_yields_nothing() {
    init_logging();
    assert!(extract_urls("hello world").is_empty());
    assert!(extract_urls("version 1.2.3 is out, e.g. today").is_empty());
    assert!(extract_urls("").is_empty());
}

#[test]
fn url_glued_to_preceding_punctuation_is_skipped() {
    init_logging();
    assert!(extract_urls("(example.com)").is_empty());
}

#[test]
fn results_never_carry_edge_control_characters() {
    init_logging();
    let inputs = [
        "a.com\u{200b}",
        "go to example.net/x\u{3}\u{f}",
        "\u{1d}\u{3}04example.org/\u{3}",
        "site.io/\u{feff} and other.dev/\u{7f}",
    ];
    for input in inputs {
        for url in extract_urls(input) {
            let first = url.chars().next().expect("non-empty candidate");
            let last = url.chars().last().expect("non-empty candidate");
            assert!(!first.is_control(), "leading control in {url:?}");
            assert!(!last.is_control(), "trailing control in {url:?}");
            assert!(!url.ends_with('\u{200b}') && !url.ends_with('\u{feff}'));
            assert_eq!(extract_urls(&url), vec![url.clone()]);
        }
    }
}

#[test]
fn normalize_adds_scheme_only_when_missing() {
    init_logging();
    assert_eq!(normalize_url("example.com/page"), "http://example.com/page");
    assert_eq!(normalize_url("http://example.com"), "http://example.com");
    assert_eq!(normalize_url("https://example.com"), "https://example.com");
    assert_eq!(normalize_url("HtTp://example.com"), "HtTp://example.com");
}
