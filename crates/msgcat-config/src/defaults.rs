//! Default values for host configuration.

use crate::schema::Config;
use msgcat_common::DEFAULT_LOCALE_CODE;

/// Default language tag.
#[must_use]
pub fn default_language() -> String {
    DEFAULT_LOCALE_CODE.to_string()
}

/// Default log filter.
#[must_use]
pub fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: default_language(),
            log_level: default_log_level(),
        }
    }
}
