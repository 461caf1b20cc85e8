use std::collections::HashSet;
use tracing::debug;

use super::cleaner::clean_link;
use super::matcher::match_marker;
use super::protocols::ProtocolRegistry;
use super::types::{Extraction, IndexedLink};
use super::validator::validate_link;
use crate::config::ScannerConfig;
use crate::error::LinkParseError;

/// Extracts links from free-form text.
///
/// Configuration lives on the instance: a scan borrows the scanner immutably,
/// so the marker list and the `www.` fix-up cannot change mid-scan.
#[derive(Debug, Clone)]
pub struct LinkScanner {
    protocols: ProtocolRegistry,
    fix_www: bool,
}

impl LinkScanner {
    pub fn new() -> Self {
        Self {
            protocols: ProtocolRegistry::new(),
            fix_www: true,
        }
    }

    pub fn from_config(config: &ScannerConfig) -> Self {
        let mut scanner = Self::new();
        scanner.set_fix_www(config.fix_www);
        scanner.add_protocols(config.protocols.iter().cloned());
        scanner
    }

    /// Whether bare `www.` links get an `http://` prefix.
    pub fn set_fix_www(&mut self, enabled: bool) {
        self.fix_www = enabled;
    }

    pub fn fix_www(&self) -> bool {
        self.fix_www
    }

    pub fn add_protocols<I, S>(&mut self, markers: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.protocols.extend(markers);
    }

    pub fn list_protocols(&self) -> &[String] {
        self.protocols.as_slice()
    }

    /// Unique links in order of first appearance, plus every parse failure.
    pub fn scan_links(&self, text: &str) -> Extraction<String> {
        let mut seen = HashSet::new();
        let mut extraction = Extraction::default();

        for token in text.split_whitespace() {
            match self.retrieve_link(token) {
                Ok(Some(link)) => {
                    if seen.insert(link.clone()) {
                        debug!(link = %link, "link accepted");
                        extraction.links.push(link);
                    }
                }
                Ok(None) => {}
                Err(err) => extraction.errors.push(err),
            }
        }

        extraction
    }

    /// One record per token that yielded a link, tagged with its 1-based
    /// word position. Repeated links are kept.
    pub fn scan_links_indexed(&self, text: &str) -> Extraction<IndexedLink> {
        let mut extraction = Extraction::default();

        for (index, token) in text.split_whitespace().enumerate() {
            match self.retrieve_link(token) {
                Ok(Some(link)) => {
                    let position = index + 1;
                    debug!(position, link = %link, "link accepted");
                    extraction.links.push(IndexedLink { position, link });
                }
                Ok(None) => {}
                Err(err) => extraction.errors.push(err),
            }
        }

        extraction
    }

    fn retrieve_link(&self, token: &str) -> Result<Option<String>, LinkParseError> {
        let Some(found) = match_marker(token, &self.protocols) else {
            return Ok(None);
        };

        let link = clean_link(found.candidate, found.bare_www && self.fix_www);
        if link.is_empty() {
            return Ok(None);
        }

        if let Err(err) = validate_link(&link) {
            debug!(link = %err.link, reason = %err.source, "link rejected");
            return Err(err);
        }

        Ok(Some(link))
    }
}

impl Default for LinkScanner {
    fn default() -> Self {
        Self::new()
    }
}
