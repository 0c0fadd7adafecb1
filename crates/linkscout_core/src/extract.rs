use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

/// Candidate URLs start at the beginning of the text, after whitespace, or
/// after a C0/C1 control character (IRC formatting bytes and the like).
/// The host must end in a 2-4 letter suffix; the path may contain one level
/// of balanced parentheses and never ends on trailing punctuation.
///
/// `\s` in the regex crate is Unicode `White_Space`, which leaves out the
/// information separators U+001C..U+001F; they are listed next to it so a
/// separator ends a candidate the same way a space does.
const URL_PATTERN: &str = concat!(
    r"(?:^|\s|[\x00-\x1f\x7f-\x9f])",
    r"(",
    r"(?:https?://)?",
    r"(?:[a-z0-9.\-]+[.][a-z]{2,4}/?)",
    r"(?:[^\s\x1c-\x1f()<>]*|\((?:[^\s\x1c-\x1f()<>]+|(?:\([^\s\x1c-\x1f()<>]+\)))*\))+",
    r"(?:\((?:[^\s\x1c-\x1f()<>]+|(?:\([^\s\x1c-\x1f()<>]+\)))*\)|[^\s\x1c-\x1f`!()\[\]{};:'\x22.,<>?])",
    r")",
);

static URL_RE: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(URL_PATTERN)
        .case_insensitive(true)
        .build()
        .unwrap_or_else(|err| panic!("invalid URL pattern: {err}"))
});

// General category "Other": Cc, Cf, Cs, Co, Cn.
static TRAILING_CONTROL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\p{C}+\z").unwrap_or_else(|err| panic!("invalid control pattern: {err}"))
});

/// Extract URL-shaped substrings from chat text, in order of appearance.
///
/// Candidates are returned exactly as written (scheme optional); see
/// [`normalize_url`] for the fully-qualified form.
pub fn extract_urls(text: &str) -> Vec<String> {
    URL_RE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| strip_trailing_control(m.as_str()).to_string())
        .collect()
}

/// Trim any run of characters in Unicode general category `C` from the
/// right edge of `candidate`.
pub fn strip_trailing_control(candidate: &str) -> &str {
    match TRAILING_CONTROL_RE.find(candidate) {
        Some(m) => &candidate[..m.start()],
        None => candidate,
    }
}

/// Prefix `http://` unless the candidate already carries an http(s) scheme.
pub fn normalize_url(candidate: &str) -> String {
    if has_http_scheme(candidate) {
        candidate.to_string()
    } else {
        format!("http://{candidate}")
    }
}

fn has_http_scheme(candidate: &str) -> bool {
    starts_with_ignore_case(candidate, "http://") || starts_with_ignore_case(candidate, "https://")
}

fn starts_with_ignore_case(value: &str, prefix: &str) -> bool {
    value
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}
