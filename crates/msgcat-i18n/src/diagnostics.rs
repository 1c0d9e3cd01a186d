//! Diagnostic events emitted while resolving and loading language files.

use crate::error::{LoadReason, ResourceLoadError};
use msgcat_common::LocaleTag;
use parking_lot::Mutex;
use std::path::PathBuf;
use tracing::{error, info};

/// Something noteworthy that happened while loading a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageEvent {
    /// The configured language has no file on disk; the default tag is used.
    FallbackToDefault {
        /// The configured value, empty when none was configured.
        requested: String,
        /// The tag used instead.
        fallback: LocaleTag,
    },
    /// The user language file does not exist.
    NotFound {
        /// Language being loaded.
        tag: LocaleTag,
        /// Expected path.
        path: PathBuf,
    },
    /// The user language file exists but could not be read.
    Unreadable {
        /// Language being loaded.
        tag: LocaleTag,
        /// File path.
        path: PathBuf,
        /// I/O error text.
        message: String,
    },
    /// The user language file is not valid YAML.
    Malformed {
        /// Language being loaded.
        tag: LocaleTag,
        /// File path.
        path: PathBuf,
        /// Parser message.
        message: String,
    },
    /// The user language file loaded successfully.
    Loaded {
        /// Language loaded.
        tag: LocaleTag,
        /// File path.
        path: PathBuf,
    },
}

impl LanguageEvent {
    /// Builds the event matching a user-file load failure.
    #[must_use]
    pub fn from_load_error(tag: &LocaleTag, err: &ResourceLoadError) -> Self {
        let path = err.path().to_path_buf();
        let tag = tag.clone();
        match err {
            ResourceLoadError::NotFound { .. } => Self::NotFound { tag, path },
            ResourceLoadError::Unreadable { source, .. } => Self::Unreadable {
                tag,
                path,
                message: source.to_string(),
            },
            ResourceLoadError::Malformed { message, .. } => Self::Malformed {
                tag,
                path,
                message: message.clone(),
            },
        }
    }

    /// The load failure reason, if this event reports one.
    #[must_use]
    pub const fn reason(&self) -> Option<LoadReason> {
        match self {
            Self::NotFound { .. } => Some(LoadReason::NotFound),
            Self::Unreadable { .. } => Some(LoadReason::Unreadable),
            Self::Malformed { .. } => Some(LoadReason::Malformed),
            Self::FallbackToDefault { .. } | Self::Loaded { .. } => None,
        }
    }
}

/// Receives [`LanguageEvent`]s.
pub trait DiagnosticSink: Send + Sync {
    /// Handles one event.
    fn report(&self, event: LanguageEvent);
}

/// Sink that writes events to the `tracing` subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, event: LanguageEvent) {
        match event {
            LanguageEvent::FallbackToDefault { requested, fallback } => {
                info!(
                    requested = %requested,
                    fallback = %fallback,
                    "Language file {}.yml does not exist. Defaulting to {}.",
                    requested,
                    fallback
                );
            }
            LanguageEvent::NotFound { tag, path } => {
                error!(
                    tag = %tag,
                    path = %path.display(),
                    "Language file {}.yml does not exist.",
                    tag
                );
            }
            LanguageEvent::Unreadable { tag, path, message } => {
                error!(
                    tag = %tag,
                    path = %path.display(),
                    error = %message,
                    "Language file {}.yml could not be read.",
                    tag
                );
            }
            LanguageEvent::Malformed { tag, path, message } => {
                error!(
                    tag = %tag,
                    path = %path.display(),
                    error = %message,
                    "Language file {}.yml is not valid yaml.",
                    tag
                );
            }
            LanguageEvent::Loaded { tag, path } => {
                info!(
                    tag = %tag,
                    path = %path.display(),
                    "Language file {}.yml successfully loaded.",
                    tag
                );
            }
        }
    }
}

/// Sink that keeps every event in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<LanguageEvent>>,
}

impl RecordingSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies of the events recorded so far.
    pub fn events(&self) -> Vec<LanguageEvent> {
        self.events.lock().clone()
    }

    /// Removes and returns the recorded events.
    pub fn take(&self) -> Vec<LanguageEvent> {
        std::mem::take(&mut *self.events.lock())
    }

    /// Number of recorded fallback events.
    pub fn fallback_count(&self) -> usize {
        self.events
            .lock()
            .iter()
            .filter(|event| matches!(event, LanguageEvent::FallbackToDefault { .. }))
            .count()
    }
}

impl DiagnosticSink for RecordingSink {
    fn report(&self, event: LanguageEvent) {
        self.events.lock().push(event);
    }
}
