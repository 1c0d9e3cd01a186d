//! Configuration loading utilities

use crate::schema::Config;
use crate::validator::ConfigValidator;
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Name of the host configuration file inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.yml";

/// Environment variable overriding the configured language.
pub const LANGUAGE_ENV_VAR: &str = "MSGCAT_LANGUAGE";

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("Failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// Configuration validation error
    #[error("Configuration validation failed: {0}")]
    Validation(String),
}

/// Configuration loader for the host application
pub struct ConfigLoader;

impl ConfigLoader {
    /// Path of the configuration file inside `data_dir`.
    pub fn config_path<P: AsRef<Path>>(data_dir: P) -> PathBuf {
        data_dir.as_ref().join(CONFIG_FILE_NAME)
    }

    /// Load configuration from a YAML file with environment variable overrides
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        Self::load_config_with(path, |key| env::var(key).ok())
    }

    /// Load configuration from a YAML file, resolving overrides through `lookup`.
    pub fn load_config_with<P, F>(path: P, lookup: F) -> Result<Config, ConfigError>
    where
        P: AsRef<Path>,
        F: Fn(&str) -> Option<String>,
    {
        debug!("Loading configuration file: {:?}", path.as_ref());
        let content = std::fs::read_to_string(path.as_ref())?;
        let mut config: Config = if content.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(&content)?
        };

        Self::apply_overrides(&mut config, lookup);
        ConfigValidator::validate(&config)?;

        Ok(config)
    }

    /// Load `config.yml` from `data_dir`, falling back to defaults when it is absent
    pub fn load<P: AsRef<Path>>(data_dir: P) -> Result<Config, ConfigError> {
        let path = Self::config_path(&data_dir);
        if path.exists() {
            return Self::load_config(&path);
        }

        info!("No configuration file at {:?}, using defaults", path);
        let mut config = Config::default();
        Self::apply_overrides(&mut config, |key| env::var(key).ok());
        ConfigValidator::validate(&config)?;
        Ok(config)
    }

    fn apply_overrides<F>(config: &mut Config, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(language) = lookup(LANGUAGE_ENV_VAR) {
            debug!("Overriding language from {}: {}", LANGUAGE_ENV_VAR, language);
            config.language = language;
        }
    }
}

