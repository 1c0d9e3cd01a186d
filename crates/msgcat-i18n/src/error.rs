//! Error types for language loading and formatting

use msgcat_common::CommonError;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Why a user language file could not be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadReason {
    /// No file at the expected path.
    NotFound,
    /// The file exists but could not be read.
    Unreadable,
    /// The file was read but is not a valid YAML mapping.
    Malformed,
}

/// Failure to load a user language file.
///
/// These never abort loading: the user layer is replaced by an empty one and
/// the condition is reported as a diagnostic.
#[derive(Error, Debug)]
pub enum ResourceLoadError {
    /// No file at the expected path.
    #[error("Language file {} does not exist", path.display())]
    NotFound {
        /// Expected file location.
        path: PathBuf,
    },

    /// The file exists but reading it failed.
    #[error("Language file {} could not be read: {source}", path.display())]
    Unreadable {
        /// File location.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid YAML or not a mapping.
    #[error("Language file {} is not valid yaml: {message}", path.display())]
    Malformed {
        /// File location.
        path: PathBuf,
        /// Parser message.
        message: String,
    },
}

impl ResourceLoadError {
    /// The reason code of this failure.
    #[must_use]
    pub const fn reason(&self) -> LoadReason {
        match self {
            Self::NotFound { .. } => LoadReason::NotFound,
            Self::Unreadable { .. } => LoadReason::Unreadable,
            Self::Malformed { .. } => LoadReason::Malformed,
        }
    }

    /// Path of the file that failed to load.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound { path }
            | Self::Unreadable { path, .. }
            | Self::Malformed { path, .. } => path,
        }
    }
}

/// Errors surfaced to callers of the i18n crate
#[derive(Error, Debug)]
pub enum I18nError {
    /// The embedded fallback language file is not packaged with the application.
    #[error("Embedded default language resource '{resource}' is missing")]
    DefaultResourceMissing {
        /// Logical resource name that was looked up.
        resource: String,
    },

    /// The embedded fallback language file does not parse.
    #[error("Embedded default language resource '{resource}' is invalid: {message}")]
    DefaultResourceMalformed {
        /// Logical resource name.
        resource: String,
        /// Parser message.
        message: String,
    },

    /// A caller passed an argument outside the accepted domain.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Writing a default language file into the data directory failed.
    #[error("Failed to install language file {}: {source}", path.display())]
    Install {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

impl I18nError {
    /// Whether the error means no usable catalog can be built.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::DefaultResourceMissing { .. } | Self::DefaultResourceMalformed { .. }
        )
    }
}

impl From<CommonError> for I18nError {
    fn from(err: CommonError) -> Self {
        Self::InvalidArgument(err.to_string())
    }
}

/// Result type for i18n operations
pub type I18nResult<T> = Result<T, I18nError>;
