mod core;
mod output;
mod scanner;

pub use core::Config;
pub use output::{OutputConfig, OutputFormat};
pub use scanner::ScannerConfig;
