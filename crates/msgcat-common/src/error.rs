//! Error types shared across the workspace.

use thiserror::Error;

/// Errors raised while constructing shared domain values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommonError {
    /// A locale tag was empty or only whitespace.
    #[error("Locale tag cannot be empty")]
    EmptyLocaleTag,

    /// A time unit name did not match any known granularity.
    #[error("Unrecognized time unit: '{0}'")]
    UnknownTimeUnit(String),

    /// A required text value was empty.
    #[error("{0} cannot be empty")]
    EmptyValue(String),
}

/// Common result type for the shared crate.
pub type Result<T> = std::result::Result<T, CommonError>;
