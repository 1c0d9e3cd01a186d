//! Configuration schema definitions.

use msgcat_common::LocaleTag;
use serde::{Deserialize, Serialize};

/// Host configuration read from `config.yml`.
///
/// Only the keys msgcat consumes are modelled; other keys in the host's file
/// are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// IETF language tag selecting the language file, e.g. `en-US`.
    #[serde(default = "crate::defaults::default_language")]
    pub language: String,
    /// Log filter used by the command line tool.
    #[serde(default = "crate::defaults::default_log_level", rename = "log-level")]
    pub log_level: String,
}

impl Config {
    /// The configured language as a tag, or `None` when blank.
    #[must_use]
    pub fn locale_tag(&self) -> Option<LocaleTag> {
        LocaleTag::new(&self.language).ok()
    }
}
