use anyhow::{Context, Result, bail};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing::info;

use crate::app::render::render;
use crate::cli::commands::{Cli, Commands, ConfigCommands, ScanArgs};
use linkscanner::links::WWW_MARKER;
use linkscanner::{Config, LinkScanner};

pub fn dispatch(cli: Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Scan(args) => {
            let config = Config::load(cli.config.as_deref())?;
            let text = read_input(&args, io::stdin().lock())?;
            run_scan(&config, &args, &text, &mut out, &mut io::stderr())
        }
        Commands::Protocols { protocols } => {
            let config = Config::load(cli.config.as_deref())?;
            let mut scanner = LinkScanner::from_config(&config.scanner);
            scanner.add_protocols(protocols);
            write_protocols(&scanner, &mut out)
        }
        Commands::Config {
            config_command: ConfigCommands::Show,
        } => {
            let config = Config::load(cli.config.as_deref())?;
            show_config(&config, &mut out)
        }
        // The existing file may be broken; init must not parse it.
        Commands::Config {
            config_command: ConfigCommands::Init { force },
        } => {
            let path = Config::resolve_path(cli.config.as_deref())?;
            init_config(path, force, &mut out)
        }
    }
}

/// Concatenate the named files, or read `stdin` when there are none. Word
/// positions therefore run on across file boundaries.
fn read_input<R: Read>(args: &ScanArgs, mut stdin: R) -> Result<String> {
    // Lossy decoding leaves U+FFFD behind, which the cleaner strips.
    if args.files.is_empty() {
        let mut bytes = Vec::new();
        stdin
            .read_to_end(&mut bytes)
            .context("Failed to read stdin")?;
        return Ok(String::from_utf8_lossy(&bytes).into_owned());
    }

    let mut parts = Vec::with_capacity(args.files.len());
    for path in &args.files {
        let bytes =
            fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
        parts.push(String::from_utf8_lossy(&bytes).into_owned());
    }
    Ok(parts.join("\n"))
}

fn run_scan<O: Write, D: Write>(
    config: &Config,
    args: &ScanArgs,
    text: &str,
    out: &mut O,
    diag: &mut D,
) -> Result<()> {
    let mut scanner = LinkScanner::from_config(&config.scanner);
    if args.no_fix_www {
        scanner.set_fix_www(false);
    }
    scanner.add_protocols(args.protocols.iter().cloned());

    let format = args.format.unwrap_or(config.output.format);
    let error_count = if args.indexed || config.output.indexed {
        let found = scanner.scan_links_indexed(text);
        info!(links = found.links.len(), errors = found.errors.len(), "scan complete");
        render(&found, format, out, diag)?;
        found.errors.len()
    } else {
        let found = scanner.scan_links(text);
        info!(links = found.links.len(), errors = found.errors.len(), "scan complete");
        render(&found, format, out, diag)?;
        found.errors.len()
    };

    if args.strict && error_count > 0 {
        bail!("{error_count} link(s) failed to parse");
    }
    Ok(())
}

fn write_protocols<O: Write>(scanner: &LinkScanner, out: &mut O) -> Result<()> {
    for marker in scanner.list_protocols() {
        writeln!(out, "{marker}")?;
    }
    let suffix = if scanner.fix_www() {
        " (bare host, prefixed with http://)"
    } else {
        " (bare host)"
    };
    writeln!(out, "{WWW_MARKER}{suffix}")?;
    Ok(())
}

fn show_config<O: Write>(config: &Config, out: &mut O) -> Result<()> {
    writeln!(out, "# {}", config.config_path.display())?;
    write!(out, "{}", config.to_toml()?)?;
    Ok(())
}

fn init_config<O: Write>(config_path: PathBuf, force: bool, out: &mut O) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            config_path.display()
        );
    }
    let fresh = Config {
        config_path,
        ..Config::default()
    };
    fresh.save()?;
    info!(path = %fresh.config_path.display(), "wrote default config");
    writeln!(out, "{}", fresh.config_path.display())?;
    Ok(())
}
