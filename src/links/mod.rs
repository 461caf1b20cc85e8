pub mod cleaner;
pub mod detector;
pub mod matcher;
pub mod protocols;
pub mod types;
pub mod validator;

pub use cleaner::clean_link;
pub use detector::LinkScanner;
pub use matcher::match_marker;
pub use protocols::{DEFAULT_PROTOCOLS, ProtocolRegistry, WWW_MARKER};
pub use types::{Extraction, IndexedLink, MarkerMatch};
pub use validator::validate_link;
