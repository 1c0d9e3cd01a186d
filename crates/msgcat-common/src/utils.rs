//! Shared utility functions.

use crate::error::{CommonError, Result};

/// Validate that a string is not empty after trimming.
pub fn validate_non_empty(value: &str, field_name: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(CommonError::EmptyValue(field_name.to_string()))
    } else {
        Ok(trimmed.to_string())
    }
}

/// Splits a dotted configuration path into its segments, skipping empty ones.
pub fn path_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('.').filter(|segment| !segment.is_empty())
}
