use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};

/// Titles longer than this many characters are cut.
pub const MAX_TITLE_CHARS: usize = 200;

static TITLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<title(\s+.*?)?>(.*?)</title>")
        .unwrap_or_else(|err| panic!("invalid title pattern: {err}"))
});

/// Inner text of the first `<title>` element, or `None` when the element is
/// missing, unterminated, or blank.
pub fn find_title(html: &str) -> Option<&str> {
    let inner = TITLE_RE.captures(html)?.get(2)?.as_str();
    if inner.trim().is_empty() {
        None
    } else {
        Some(inner)
    }
}

/// Collapse whitespace, trim, decode character references and truncate.
pub fn sanitize_title(raw: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    let decoded = decode_character_references(&collapsed);
    truncate_chars(&decoded, MAX_TITLE_CHARS)
}

/// Title text is RCDATA: markup stays literal, references are decoded.
/// Re-parsing it inside a `<title>` gets exactly that treatment from the
/// HTML parser.
fn decode_character_references(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }

    let doc = Html::parse_document(&format!("<title>{text}</title>"));
    Selector::parse("title")
        .ok()
        .and_then(|sel| doc.select(&sel).next().map(|t| t.text().collect::<String>()))
        .unwrap_or_else(|| text.to_string())
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}
