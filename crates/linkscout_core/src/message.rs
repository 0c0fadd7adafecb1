//! Outbound chat lines and the `.shorten` command surface.

pub const SHORTEN_USAGE: &str = "Syntax: .shorten <url>";
pub const SHORTEN_FAILED: &str = "Error shortening URL";

/// Line reported for a resolved title, with or without a short link.
pub fn title_message(title: &str, short_url: Option<&str>) -> String {
    match short_url {
        Some(short_url) => format!("^ {title}: {short_url}"),
        None => format!("URL Found: {title}"),
    }
}

pub fn shortened_reply(short_url: &str) -> String {
    format!("Shortened URL: {short_url}")
}

/// Parsed `.shorten <url>` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortenCommand {
    Shorten { url: String },
    /// Argument missing; reply with [`SHORTEN_USAGE`].
    Usage,
}

impl ShortenCommand {
    /// Parses the full command line; the first token is the command word
    /// itself and the second is the URL. Extra tokens are ignored.
    pub fn parse(line: &str) -> Self {
        match line.split_whitespace().nth(1) {
            Some(url) => ShortenCommand::Shorten {
                url: url.to_string(),
            },
            None => ShortenCommand::Usage,
        }
    }
}
