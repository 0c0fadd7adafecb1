use std::fmt;

/// A resolved page title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleResult {
    /// Inner text of the `<title>` element exactly as served.
    pub raw_title: String,
    /// Whitespace-collapsed, entity-decoded, truncated title.
    pub title: String,
    /// The URL that was requested.
    pub source_url: String,
    /// The URL the client ended up at after any implicit redirects.
    pub final_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for FetchError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    Timeout,
    ConnectionFailure,
    HttpStatus(u16),
    UnsupportedContentType { content_type: String },
    NoTitleFound,
    Other,
}

impl FailureKind {
    /// Network-level failures are worth an operator's attention; the rest
    /// are ordinary outcomes for arbitrary links.
    pub fn is_network(&self) -> bool {
        matches!(self, FailureKind::Timeout | FailureKind::ConnectionFailure)
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::ConnectionFailure => write!(f, "connection failure"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::UnsupportedContentType { content_type } => {
                write!(f, "unsupported content type {content_type:?}")
            }
            FailureKind::NoTitleFound => write!(f, "no title found"),
            FailureKind::Other => write!(f, "fetch error"),
        }
    }
}
