//! Common type definitions and newtype wrappers for domain modeling.

use crate::error::{CommonError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use unic_langid::LanguageIdentifier;

/// Tag of the language every lookup falls back to.
pub const DEFAULT_LOCALE_CODE: &str = "en-US";

/// An IETF-style language tag naming a language file, e.g. `en-US`.
///
/// Tags compare by exact, case-sensitive string match. Surrounding whitespace
/// is trimmed on construction and an empty tag is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LocaleTag(String);

impl LocaleTag {
    /// Creates a tag from the given text.
    pub fn new(tag: impl AsRef<str>) -> Result<Self> {
        let trimmed = tag.as_ref().trim();
        if trimmed.is_empty() {
            return Err(CommonError::EmptyLocaleTag);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The fallback tag, `en-US`.
    #[must_use]
    pub fn default_tag() -> Self {
        Self(DEFAULT_LOCALE_CODE.to_string())
    }

    /// Returns the tag text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the fallback tag.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.0 == DEFAULT_LOCALE_CODE
    }

    /// File name of the language resource for this tag, e.g. `en-US.yml`.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.yml", self.0)
    }

    /// Parses the tag as a BCP-47 language identifier.
    #[must_use]
    pub fn language_identifier(&self) -> Option<LanguageIdentifier> {
        self.0.parse().ok()
    }

    /// Whether the tag is a syntactically valid BCP-47 identifier.
    ///
    /// Lookups never depend on this; a malformed tag simply has no file.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.language_identifier().is_some()
    }
}

impl Default for LocaleTag {
    fn default() -> Self {
        Self::default_tag()
    }
}

impl fmt::Display for LocaleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for LocaleTag {
    type Err = CommonError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for LocaleTag {
    type Error = CommonError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<LocaleTag> for String {
    fn from(tag: LocaleTag) -> Self {
        tag.0
    }
}

impl AsRef<str> for LocaleTag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Granularity of a formatted duration, coarsest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    /// Whole days.
    Days,
    /// Whole hours.
    Hours,
    /// Whole minutes.
    Minutes,
    /// Whole seconds.
    #[default]
    Seconds,
}

impl TimeUnit {
    /// All units in descending order of size.
    pub const ALL: [Self; 4] = [Self::Days, Self::Hours, Self::Minutes, Self::Seconds];

    /// Number of milliseconds in one of this unit.
    #[must_use]
    pub const fn millis(self) -> i64 {
        match self {
            Self::Days => 86_400_000,
            Self::Hours => 3_600_000,
            Self::Minutes => 60_000,
            Self::Seconds => 1_000,
        }
    }

    /// Whether this unit is coarser than or equal to `other`.
    #[must_use]
    pub const fn is_at_least(self, other: Self) -> bool {
        self.millis() >= other.millis()
    }

    /// Lowercase plural name of the unit.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Days => "days",
            Self::Hours => "hours",
            Self::Minutes => "minutes",
            Self::Seconds => "seconds",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeUnit {
    type Err = CommonError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "d" | "day" | "days" => Ok(Self::Days),
            "h" | "hour" | "hours" => Ok(Self::Hours),
            "m" | "min" | "minute" | "minutes" => Ok(Self::Minutes),
            "s" | "sec" | "second" | "seconds" => Ok(Self::Seconds),
            _ => Err(CommonError::UnknownTimeUnit(s.to_string())),
        }
    }
}
