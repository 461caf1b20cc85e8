use clap::{Args, Parser, Subcommand};
use linkscanner::config::OutputFormat;
use std::path::PathBuf;

mod subcommands;

pub use subcommands::ConfigCommands;

/// `linkscanner` - Extract links from free-form text.
#[derive(Parser, Debug)]
#[command(name = "linkscanner")]
#[command(version)]
#[command(about = "Extract HTTP, FTP, mailto and www links from text.", long_about = None)]
pub struct Cli {
    /// Path to config.toml (default: ~/.linkscanner/config.toml)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Log every accepted and rejected link to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan files (or stdin) for links
    Scan(ScanArgs),

    /// List the protocol markers a scan would recognize
    Protocols {
        /// Extra marker to register (repeatable)
        #[arg(short, long = "protocol")]
        protocols: Vec<String>,
    },

    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        config_command: ConfigCommands,
    },
}

#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Files to scan; reads stdin when none are given
    pub files: Vec<PathBuf>,

    /// Report word positions instead of unique links
    #[arg(short, long)]
    pub indexed: bool,

    /// Output format (overrides config)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Leave bare www. links without an http:// prefix
    #[arg(long)]
    pub no_fix_www: bool,

    /// Extra marker to register (repeatable)
    #[arg(short, long = "protocol")]
    pub protocols: Vec<String>,

    /// Exit with an error if any link failed to parse
    #[arg(long)]
    pub strict: bool,
}
