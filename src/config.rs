use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use herald_core::Level;
use serde::{Deserialize, Serialize};

/// Errors that can occur while loading or resolving application configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to determine the user's configuration directory. This usually
    /// occurs when required environment variables are missing (e.g., `$HOME`
    /// on Unix or `%APPDATA%` on Windows).
    #[error("failed to obtain user's directories")]
    DirectoriesNotFound,
    /// An I/O error occurred while reading or writing the configuration file.
    #[error("failed to read config: {0}")]
    IoError(#[from] std::io::Error),
    /// The configuration file contains invalid TOML or does not match the
    /// expected structure.
    #[error("failed to deserialize config: {0}")]
    DeserializeError(#[from] toml::de::Error),
    /// Failed to serialize the default configuration on first run.
    #[error("failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

/// Global application configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Title of the window hosting rendered notifications.
    pub dialog_title: String,
    /// Minimum severity forwarded to the dialog observer.
    pub min_dialog_level: Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dialog_title: "Herald".to_string(),
            min_dialog_level: Level::Info,
        }
    }
}

fn config_path() -> Result<PathBuf, ConfigError> {
    match ProjectDirs::from("io", "herald", "herald") {
        Some(dirs) => Ok(dirs.config_dir().join("config.toml")),
        None => Err(ConfigError::DirectoriesNotFound),
    }
}

/// Loads the application configuration from disk. A missing file is
/// initialized with the defaults and written back.
pub fn load_config() -> Result<Config, ConfigError> {
    let path = config_path()?;
    log::info!("Loading configuration from {path:?}");
    read_or_init(&path)
}

fn read_or_init(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        return Ok(config);
    }

    let config = Config::default();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, toml::to_string_pretty(&config)?)?;

    Ok(config)
}
