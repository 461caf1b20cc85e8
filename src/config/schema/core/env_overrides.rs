use super::Config;
use crate::config::OutputFormat;
use std::str::FromStr;
use tracing::warn;

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl Config {
    pub fn apply_env_overrides(&mut self) {
        if let Ok(raw) = std::env::var("LINKSCANNER_FIX_WWW") {
            match parse_bool(&raw) {
                Some(fix) => self.scanner.fix_www = fix,
                None => warn!(value = %raw, "ignoring LINKSCANNER_FIX_WWW"),
            }
        }

        if let Ok(raw) = std::env::var("LINKSCANNER_PROTOCOLS") {
            self.scanner.protocols.extend(
                raw.split(',')
                    .map(str::trim)
                    .filter(|m| !m.is_empty())
                    .map(String::from),
            );
        }

        if let Ok(raw) = std::env::var("LINKSCANNER_FORMAT")
            && !raw.is_empty()
        {
            match OutputFormat::from_str(raw.trim()) {
                Ok(format) => self.output.format = format,
                Err(_) => warn!(value = %raw, "ignoring LINKSCANNER_FORMAT"),
            }
        }
    }
}
