//! Loading user and embedded language files into a layered source

use crate::diagnostics::{DiagnosticSink, LanguageEvent};
use crate::embedded::EmbeddedResources;
use crate::error::{I18nError, I18nResult, ResourceLoadError};
use crate::layered::{empty_layer, LayeredSource};
use crate::locale::{embedded_resource_name, LocaleResolver, LANGUAGE_DIR};
use msgcat_common::LocaleTag;
use serde_yaml::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Builds [`LayeredSource`]s from a data directory and embedded defaults.
pub struct LanguageLoader {
    resolver: LocaleResolver,
    resources: Arc<dyn EmbeddedResources>,
    sink: Arc<dyn DiagnosticSink>,
}

impl LanguageLoader {
    /// Creates a loader for `<data_dir>/language`.
    pub fn new<P: AsRef<Path>>(
        data_dir: P,
        resources: Arc<dyn EmbeddedResources>,
        sink: Arc<dyn DiagnosticSink>,
    ) -> Self {
        Self {
            resolver: LocaleResolver::new(data_dir, Arc::clone(&sink)),
            resources,
            sink,
        }
    }

    /// The resolver sharing this loader's data directory and sink.
    #[must_use]
    pub const fn resolver(&self) -> &LocaleResolver {
        &self.resolver
    }

    /// Reads and parses the user language file for `tag`.
    pub fn load_user_layer(&self, tag: &LocaleTag) -> Result<Value, ResourceLoadError> {
        let path = self.resolver.language_file(tag);
        debug!("Loading language file: {:?}", path);

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(ResourceLoadError::NotFound { path });
            }
            Err(source) => return Err(ResourceLoadError::Unreadable { path, source }),
        };

        parse_layer(&content).map_err(|message| ResourceLoadError::Malformed { path, message })
    }

    /// Logical name of the embedded file backing `tag`.
    ///
    /// Languages without an embedded file use the `en-US` resource.
    #[must_use]
    pub fn default_resource_name(&self, tag: &LocaleTag) -> String {
        let name = embedded_resource_name(tag);
        if self.resources.contains(&name) {
            return name;
        }

        debug!("No embedded resource {}, using the default language", name);
        embedded_resource_name(&LocaleTag::default_tag())
    }

    /// Parses the embedded default layer for `tag`.
    ///
    /// Failure here is a packaging defect and always fatal.
    pub fn load_default_layer(&self, tag: &LocaleTag) -> I18nResult<Value> {
        let resource = self.default_resource_name(tag);
        let bytes = self
            .resources
            .get(&resource)
            .ok_or_else(|| I18nError::DefaultResourceMissing {
                resource: resource.clone(),
            })?;

        let content = std::str::from_utf8(&bytes).map_err(|e| I18nError::DefaultResourceMalformed {
            resource: resource.clone(),
            message: e.to_string(),
        })?;

        parse_layer(content)
            .map_err(|message| I18nError::DefaultResourceMalformed { resource, message })
    }

    /// Loads the user file for `tag` layered over its embedded defaults.
    ///
    /// User-file failures are reported to the sink and replaced by an empty
    /// layer; only a missing or invalid embedded default is an error.
    pub fn load(&self, tag: &LocaleTag) -> I18nResult<LayeredSource> {
        let user = match self.load_user_layer(tag) {
            Ok(layer) => {
                self.sink.report(LanguageEvent::Loaded {
                    tag: tag.clone(),
                    path: self.resolver.language_file(tag),
                });
                layer
            }
            Err(err) => {
                self.sink.report(LanguageEvent::from_load_error(tag, &err));
                empty_layer()
            }
        };

        let defaults = self.load_default_layer(tag)?;
        Ok(LayeredSource::new(user, defaults))
    }

    /// Copies every embedded language file that is not yet on disk into the
    /// data directory, so administrators have files to edit.
    ///
    /// Returns the paths written. Existing files are never overwritten.
    pub fn install_defaults(&self) -> I18nResult<Vec<PathBuf>> {
        let prefix = format!("{LANGUAGE_DIR}/");
        let mut installed = Vec::new();

        for name in self.resources.names() {
            let Some(file_name) = name.strip_prefix(&prefix) else {
                continue;
            };
            if !file_name.ends_with(".yml") || file_name.contains('/') {
                continue;
            }

            let path = self.resolver.language_dir().join(file_name);
            if path.exists() {
                debug!("Language file already installed: {:?}", path);
                continue;
            }

            let Some(contents) = self.resources.get(&name) else {
                warn!("Embedded resource {} disappeared while installing", name);
                continue;
            };

            fs::create_dir_all(self.resolver.language_dir()).map_err(|source| I18nError::Install {
                path: self.resolver.language_dir().to_path_buf(),
                source,
            })?;
            fs::write(&path, contents.as_ref()).map_err(|source| I18nError::Install {
                path: path.clone(),
                source,
            })?;

            info!("Installed language file {:?}", path);
            installed.push(path);
        }

        Ok(installed)
    }
}

impl std::fmt::Debug for LanguageLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageLoader")
            .field("resolver", &self.resolver)
            .finish_non_exhaustive()
    }
}

/// Parses one language file. Empty documents are empty layers; anything
/// other than a mapping at the top level is rejected.
fn parse_layer(content: &str) -> Result<Value, String> {
    if content.trim().is_empty() {
        return Ok(empty_layer());
    }

    let value: Value = serde_yaml::from_str(content).map_err(|e| e.to_string())?;
    if value.is_mapping() {
        Ok(value)
    } else if value.is_null() {
        Ok(empty_layer())
    } else {
        Err(format!(
            "expected a mapping at the top level, found {}",
            value_kind(&value)
        ))
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
