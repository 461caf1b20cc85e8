use super::Config;
use crate::error::ConfigError;
use anyhow::{Context, Result};
use directories::UserDirs;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const CONFIG_DIR: &str = ".linkscanner";
const CONFIG_FILE: &str = "config.toml";

impl Config {
    /// `~/.linkscanner/config.toml`
    pub fn default_path() -> Result<PathBuf> {
        let home = UserDirs::new()
            .map(|u| u.home_dir().to_path_buf())
            .context("Could not find home directory")?;
        Ok(home.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// `path` with `~` expanded, or the default location. Never reads the file.
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(shellexpand::tilde(p).as_ref())),
            None => Self::default_path(),
        }
    }

    /// Load from `path` (tilde-expanded) or the default location, then apply
    /// environment overrides. A missing file yields the defaults.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let config_path = Self::resolve_path(path)?;
        let mut config = Self::load_from(&config_path)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        let mut config = if config_path.exists() {
            debug!(path = %config_path.display(), "loading config");
            let contents = fs::read_to_string(config_path)
                .map_err(ConfigError::Io)
                .context("Failed to read config file")?;
            toml::from_str::<Self>(&contents)
                .map_err(|e| ConfigError::Load(e.to_string()))
                .context("Failed to parse config file")?
        } else {
            debug!(path = %config_path.display(), "no config file, using defaults");
            Self::default()
        };
        config.config_path = config_path.to_path_buf();
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.config_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }
        fs::write(&self.config_path, self.to_toml()?).context("Failed to write config file")?;
        Ok(())
    }
}
