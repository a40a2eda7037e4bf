//! Configuration file discovery and parsing.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::types::{is_valid_date_format, Config};

const APP_DIR: &str = "hotspot-review";
const CONFIG_FILE: &str = "config.toml";

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested config file does not exist
    #[error("Config file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The config file could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    /// The config file is not valid TOML for [`Config`]
    #[error("Invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// `display.date_format` contains a specifier chrono does not know
    #[error("Invalid date format in {}: {format:?}", path.display())]
    InvalidDateFormat { path: PathBuf, format: String },
}

/// `$XDG_CONFIG_HOME/hotspot-review/config.toml` or the platform equivalent.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one the default location is
    /// used when present, otherwise built-in defaults apply.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound {
                        path: path.to_path_buf(),
                    });
                }
                Self::from_file(path)
            }
            None => match default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => {
                    tracing::debug!("No config file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        if !is_valid_date_format(&config.display.date_format) {
            return Err(ConfigError::InvalidDateFormat {
                path: path.to_path_buf(),
                format: config.display.date_format,
            });
        }
        tracing::info!(path = %path.display(), "Loaded config");
        Ok(config)
    }
}
