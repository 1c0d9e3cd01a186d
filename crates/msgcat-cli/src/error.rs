//! Application-wide error types using thiserror.

use msgcat_config::ConfigError;
use msgcat_i18n::I18nError;

/// Main application error type.
#[derive(thiserror::Error, Debug)]
pub enum CliError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Catalog error.
    #[error("Catalog error: {0}")]
    I18n(#[from] I18nError),

    /// No such message id.
    #[error("Unknown message id: {0}")]
    UnknownMessage(String),

    /// No such macro key.
    #[error("Unknown macro key: {0}")]
    UnknownMacro(String),
}

/// Result type for the command line application.
pub type CliResult<T> = Result<T, CliError>;
