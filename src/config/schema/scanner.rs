use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScannerConfig {
    /// Prefix bare `www.` links with `http://`
    #[serde(default = "default_true")]
    pub fix_www: bool,
    /// Extra scheme markers, checked after the built-in ones
    #[serde(default)]
    pub protocols: Vec<String>,
}

fn default_true() -> bool {
    true
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            fix_www: true,
            protocols: Vec::new(),
        }
    }
}

impl ScannerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for marker in &self.protocols {
            if marker.is_empty() {
                return Err(ConfigError::Validation(
                    "scanner.protocols must not contain empty markers".into(),
                ));
            }
            if marker.chars().any(char::is_whitespace) {
                return Err(ConfigError::Validation(format!(
                    "scanner.protocols entry {marker:?} contains whitespace"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fix_www() {
        let config = ScannerConfig::default();
        assert!(config.fix_www);
        assert!(config.protocols.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_marker_rejected() {
        let config = ScannerConfig {
            protocols: vec![String::new()],
            ..ScannerConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn whitespace_marker_rejected() {
        let config = ScannerConfig {
            protocols: vec!["go :".into()],
            ..ScannerConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("go :"));
    }
}
