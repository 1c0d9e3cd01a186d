//! Thread-safe configuration caching with arc-swap for lock-free reads.

use crate::loader::{ConfigError, ConfigLoader};
use crate::schema::Config;
use arc_swap::ArcSwap;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Thread-safe configuration cache using arc-swap for lock-free reads.
#[derive(Debug)]
pub struct ConfigCache {
    config: ArcSwap<Config>,
}

impl ConfigCache {
    /// Creates a new configuration cache with the given initial configuration.
    pub fn new(config: Config) -> Self {
        Self {
            config: ArcSwap::from_pointee(config),
        }
    }

    /// Loads `config.yml` from `data_dir` into a new cache.
    pub fn load<P: AsRef<Path>>(data_dir: P) -> Result<Self, ConfigError> {
        Ok(Self::new(ConfigLoader::load(data_dir)?))
    }

    /// Gets the current configuration.
    pub fn get(&self) -> Arc<Config> {
        self.config.load_full()
    }

    /// Updates the configuration atomically.
    pub fn update(&self, config: Config) {
        self.config.store(Arc::new(config));
    }

    /// Reloads from a file; on failure the current configuration stays live.
    pub fn reload_from_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let config = ConfigLoader::load_config(path)?;
        info!("Configuration reloaded, language: {}", config.language);
        self.update(config);
        Ok(())
    }

    /// Reloads `config.yml` from `data_dir`; on failure the current configuration stays live.
    pub fn reload<P: AsRef<Path>>(&self, data_dir: P) -> Result<(), ConfigError> {
        let config = ConfigLoader::load(data_dir)?;
        info!("Configuration reloaded, language: {}", config.language);
        self.update(config);
        Ok(())
    }
}

impl Default for ConfigCache {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
