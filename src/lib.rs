#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]

//! Scan free-form text for links: `http://`, `https://`, `ftp://`, `mailto:`,
//! caller-registered schemes, and bare `www.` hosts.
//!
//! ```
//! use linkscanner::LinkScanner;
//!
//! let scanner = LinkScanner::new();
//! let found = scanner.scan_links("docs at www.example.com, mirror at ftp://files.example.com.");
//! assert_eq!(found.links, vec!["http://www.example.com", "ftp://files.example.com"]);
//! ```

pub mod config;
pub mod error;
pub mod links;

pub use config::Config;
pub use error::{ConfigError, LinkParseError};
pub use links::{Extraction, IndexedLink, LinkScanner};
