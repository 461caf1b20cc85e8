use serde::{Deserialize, Serialize};

use crate::error::LinkParseError;

/// A link found at a given token ordinal (1-based, counted in whitespace-delimited words).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexedLink {
    pub position: usize,
    pub link: String,
}

/// Links accepted during a scan, paired with every link that failed to parse.
#[derive(Debug)]
pub struct Extraction<T> {
    pub links: Vec<T>,
    pub errors: Vec<LinkParseError>,
}

impl<T> Default for Extraction<T> {
    fn default() -> Self {
        Self {
            links: Vec::new(),
            errors: Vec::new(),
        }
    }
}

impl<T> Extraction<T> {
    pub fn is_empty(&self) -> bool {
        self.links.is_empty() && self.errors.is_empty()
    }

    pub fn into_parts(self) -> (Vec<T>, Vec<LinkParseError>) {
        (self.links, self.errors)
    }
}

/// Result of locating a marker inside a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerMatch<'a> {
    /// The token from the marker onwards, in its original case.
    pub candidate: &'a str,
    /// Set when only the bare `www.` marker matched.
    pub bare_www: bool,
}
