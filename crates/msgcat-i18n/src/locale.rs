//! Locale selection: which language file a load should use.

use crate::diagnostics::{DiagnosticSink, LanguageEvent};
use msgcat_common::LocaleTag;
use msgcat_config::ConfigCache;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// Directory holding language files, both on disk and in embedded resources.
pub const LANGUAGE_DIR: &str = "language";

/// Logical name of the embedded resource for `tag`.
///
/// Always uses `/`, regardless of platform.
#[must_use]
pub fn embedded_resource_name(tag: &LocaleTag) -> String {
    format!("{LANGUAGE_DIR}/{}", tag.file_name())
}

/// Supplies the language an administrator configured.
pub trait LanguageSource: Send + Sync {
    /// The configured language, or `None` when unset.
    fn configured_language(&self) -> Option<String>;
}

/// A fixed language.
impl LanguageSource for LocaleTag {
    fn configured_language(&self) -> Option<String> {
        Some(self.to_string())
    }
}

/// The `language` key of the live host configuration.
impl LanguageSource for ConfigCache {
    fn configured_language(&self) -> Option<String> {
        Some(self.get().language.clone())
    }
}

/// Picks the language file to load, falling back to `en-US`.
pub struct LocaleResolver {
    language_dir: PathBuf,
    sink: Arc<dyn DiagnosticSink>,
}

impl LocaleResolver {
    /// Creates a resolver for language files under `<data_dir>/language`.
    pub fn new<P: AsRef<Path>>(data_dir: P, sink: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            language_dir: data_dir.as_ref().join(LANGUAGE_DIR),
            sink,
        }
    }

    /// The directory holding user language files.
    #[must_use]
    pub fn language_dir(&self) -> &Path {
        &self.language_dir
    }

    /// Path of the user language file for `tag`. The file may not exist.
    #[must_use]
    pub fn language_file(&self, tag: &LocaleTag) -> PathBuf {
        self.language_dir.join(tag.file_name())
    }

    /// Returns `configured` if its language file exists, otherwise `en-US`.
    ///
    /// Falling back reports exactly one [`LanguageEvent::FallbackToDefault`].
    pub fn resolve(&self, configured: &LocaleTag) -> LocaleTag {
        let path = self.language_file(configured);
        if path.exists() {
            debug!("Language file found: {:?}", path);
            return configured.clone();
        }

        let fallback = LocaleTag::default_tag();
        self.sink.report(LanguageEvent::FallbackToDefault {
            requested: configured.to_string(),
            fallback: fallback.clone(),
        });
        fallback
    }

    /// Resolves a raw configured value; unset or blank falls back like a missing file.
    pub fn resolve_configured(&self, configured: Option<&str>) -> LocaleTag {
        match configured.map(LocaleTag::new) {
            Some(Ok(tag)) => self.resolve(&tag),
            _ => {
                let fallback = LocaleTag::default_tag();
                self.sink.report(LanguageEvent::FallbackToDefault {
                    requested: configured.unwrap_or_default().to_string(),
                    fallback: fallback.clone(),
                });
                fallback
            }
        }
    }
}

impl std::fmt::Debug for LocaleResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocaleResolver")
            .field("language_dir", &self.language_dir)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::RecordingSink;

    #[test]
    fn test_embedded_resource_name_uses_forward_slash() {
        let tag = LocaleTag::new("fr-FR").unwrap();
        assert_eq!(embedded_resource_name(&tag), "language/fr-FR.yml");
    }

    #[test]
    fn test_blank_configuration_falls_back() {
        let sink = Arc::new(RecordingSink::new());
        let resolver = LocaleResolver::new("does-not-exist", sink.clone());

        assert_eq!(resolver.resolve_configured(Some("  ")), LocaleTag::default_tag());
        assert_eq!(resolver.resolve_configured(None), LocaleTag::default_tag());
        assert_eq!(sink.fallback_count(), 2);
    }

    #[test]
    fn test_fixed_language_source() {
        let tag = LocaleTag::new("de-DE").unwrap();
        assert_eq!(tag.configured_language().as_deref(), Some("de-DE"));
    }
}
