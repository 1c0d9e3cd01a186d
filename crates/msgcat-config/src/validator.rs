//! Runtime validation of loaded configuration.

use crate::loader::ConfigError;
use crate::schema::Config;
use msgcat_common::validate_non_empty;

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration.
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        validate_non_empty(&config.language, "language")
            .map_err(|e| ConfigError::Validation(e.to_string()))?;
        validate_non_empty(&config.log_level, "log-level")
            .map_err(|e| ConfigError::Validation(e.to_string()))?;
        Ok(())
    }
}
