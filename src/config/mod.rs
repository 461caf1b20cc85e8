pub mod schema;

pub use schema::{Config, OutputConfig, OutputFormat, ScannerConfig};
