use thiserror::Error;

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config: {0}")]
    Load(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

// ─── Link errors ─────────────────────────────────────────────────────────────

/// A cleaned candidate that the URL parser rejected. Never fatal to a scan.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("excluding URL after failure to parse: {link}")]
pub struct LinkParseError {
    pub link: String,
    #[source]
    pub source: url::ParseError,
}

impl LinkParseError {
    pub fn new(link: impl Into<String>, source: url::ParseError) -> Self {
        Self {
            link: link.into(),
            source,
        }
    }

    /// Message including the parser's reason, for flat (non-chained) output.
    pub fn detail(&self) -> String {
        format!("{self}: {}", self.source)
    }
}
