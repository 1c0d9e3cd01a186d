//! Command handlers over a live [`MessageFacade`].

use crate::cli::Command;
use crate::error::{CliError, CliResult};
use crate::ids::{bundled_resources, MacroKey, MessageId};
use msgcat_config::{Config, ConfigCache};
use msgcat_i18n::{DiagnosticSink, EmbeddedResources, MessageFacade, MessageKey, TracingSink};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

/// An opened data directory.
#[derive(Debug)]
pub struct App {
    data_dir: PathBuf,
    config: Arc<ConfigCache>,
    facade: MessageFacade<MessageId>,
}

impl App {
    /// Opens `data_dir` with the bundled language files as defaults.
    ///
    /// # Errors
    ///
    /// If `config.yml` is invalid or the bundled defaults cannot be loaded.
    pub fn open<P: AsRef<Path>>(data_dir: P) -> CliResult<Self> {
        let config = Arc::new(ConfigCache::load(&data_dir)?);
        Self::open_with_config(data_dir, config)
    }

    /// Opens `data_dir` with an already loaded configuration.
    ///
    /// # Errors
    ///
    /// If the bundled defaults cannot be loaded.
    pub fn open_with_config<P: AsRef<Path>>(
        data_dir: P,
        config: Arc<ConfigCache>,
    ) -> CliResult<Self> {
        Self::with_parts(
            data_dir,
            config,
            Arc::new(bundled_resources()),
            Arc::new(TracingSink),
        )
    }

    /// Opens `data_dir` with explicit parts.
    ///
    /// # Errors
    ///
    /// If the embedded defaults cannot be loaded.
    pub fn with_parts<P: AsRef<Path>>(
        data_dir: P,
        config: Arc<ConfigCache>,
        resources: Arc<dyn EmbeddedResources>,
        sink: Arc<dyn DiagnosticSink>,
    ) -> CliResult<Self> {
        let data_dir = data_dir.as_ref().to_path_buf();
        let facade = MessageFacade::with_sink(&data_dir, config.clone(), resources, sink)?;

        Ok(Self {
            data_dir,
            config,
            facade,
        })
    }

    /// The data directory.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Current configuration.
    pub fn config(&self) -> Arc<Config> {
        self.config.get()
    }

    /// The live catalog facade.
    pub const fn facade(&self) -> &MessageFacade<MessageId> {
        &self.facade
    }

    /// Runs `command` and returns what to print.
    ///
    /// # Errors
    ///
    /// Unknown ids or macro keys, invalid durations, install failures.
    pub fn run(&self, command: &Command) -> CliResult<String> {
        debug!("Running command: {:?}", command);
        match command {
            Command::Show { id, macros } => self.show(id, macros),
            Command::Item => Ok(self.item()),
            Command::Time {
                millis,
                granularity,
            } => self.time(*millis, granularity.as_deref()),
            Command::Install => self.install(),
            Command::Check => Ok(self.check()),
        }
    }

    /// Enabled flag, repeat delay and text of one message.
    ///
    /// # Errors
    ///
    /// `UnknownMessage` or `UnknownMacro`.
    pub fn show(&self, id: &str, macros: &[(String, String)]) -> CliResult<String> {
        let id = MessageId::from_key(id).ok_or_else(|| CliError::UnknownMessage(id.to_string()))?;

        let mut message = self.facade.build((), id);
        for (key, value) in macros {
            let key =
                MacroKey::from_key(key).ok_or_else(|| CliError::UnknownMacro(key.clone()))?;
            message = message.set_macro(key, value);
        }

        Ok(format!(
            "{}\nenabled: {}\nrepeat-delay: {}s\ntext: {}",
            id.key(),
            message.is_enabled(),
            message.repeat_delay(),
            message.text()
        ))
    }

    /// Catalog-wide item and display names.
    pub fn item(&self) -> String {
        let catalog = self.facade.snapshot();
        let mut lines = vec![
            format!("language: {}", catalog.tag()),
            format!("item name: {}", catalog.item_name()),
            format!("item name (plural): {}", catalog.item_name_plural()),
            format!("inventory item name: {}", catalog.inventory_item_name()),
            "lore:".to_string(),
        ];
        lines.extend(catalog.item_lore().iter().map(|line| format!("  {line}")));
        lines.push(format!("spawn: {}", catalog.spawn_display_name()));
        lines.push(format!("home: {}", catalog.home_display_name()));
        lines.join("\n")
    }

    /// A formatted duration.
    ///
    /// # Errors
    ///
    /// Negative `millis` or an unknown granularity.
    pub fn time(&self, millis: i64, granularity: Option<&str>) -> CliResult<String> {
        let text = match granularity {
            Some(unit) => self.facade.time_string_in(millis, unit)?,
            None => self.facade.time_string(millis)?,
        };
        Ok(text)
    }

    /// Writes the bundled language files not yet on disk, then reloads.
    ///
    /// # Errors
    ///
    /// If a file cannot be written or the reload fails.
    pub fn install(&self) -> CliResult<String> {
        let written = self.facade.loader().install_defaults()?;
        self.facade.reload()?;
        info!("Installed {} language file(s)", written.len());

        if written.is_empty() {
            return Ok("All bundled language files are already installed.".to_string());
        }

        let mut lines = vec!["Installed:".to_string()];
        lines.extend(written.iter().map(|path| format!("  {}", path.display())));
        Ok(lines.join("\n"))
    }

    /// Configured and resolved language, plus messages without text.
    pub fn check(&self) -> String {
        let catalog = self.facade.snapshot();
        let config = self.config.get();
        let missing = catalog.missing_messages(MessageId::ALL);
        let language_file = self.facade.loader().resolver().language_file(catalog.tag());

        let mut lines = vec![
            format!("configured language: {}", config.language),
            format!("resolved language: {}", catalog.tag()),
            format!(
                "language file: {} ({})",
                language_file.display(),
                if language_file.is_file() {
                    "present"
                } else {
                    "missing, using bundled defaults"
                }
            ),
        ];

        if missing.is_empty() {
            lines.push(format!("all {} messages have text", MessageId::ALL.len()));
        } else {
            lines.push("messages without text:".to_string());
            lines.extend(missing.iter().map(|id| format!("  {}", id.key())));
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use msgcat_i18n::{RecordingSink, StaticResources};

    fn app_with(resources: StaticResources) -> (tempfile::TempDir, App) {
        let dir = tempfile::tempdir().unwrap();
        let app = App::with_parts(
            dir.path(),
            Arc::new(ConfigCache::default()),
            Arc::new(resources),
            Arc::new(RecordingSink::new()),
        )
        .unwrap();
        (dir, app)
    }

    #[test]
    fn test_show_unknown_message() {
        let (_dir, app) = app_with(StaticResources::new().with("language/en-US.yml", ""));
        assert!(matches!(
            app.show("NOPE", &[]),
            Err(CliError::UnknownMessage(id)) if id == "NOPE"
        ));
    }

    #[test]
    fn test_show_unknown_macro() {
        let (_dir, app) = app_with(StaticResources::new().with("language/en-US.yml", ""));
        let macros = vec![("NOPE".to_string(), "x".to_string())];
        assert!(matches!(
            app.show("TELEPORT_CANCELLED", &macros),
            Err(CliError::UnknownMacro(key)) if key == "NOPE"
        ));
    }

    #[test]
    fn test_check_lists_missing_messages() {
        let yaml = "MESSAGES:\n  TELEPORT_CANCELLED:\n    string: Cancelled.\n";
        let (_dir, app) = app_with(StaticResources::new().with("language/en-US.yml", yaml));

        let report = app.check();
        assert!(report.contains("resolved language: en-US"));
        assert!(report.contains("COMMAND_SUCCESS_HOME"));
        assert!(!report.contains("\n  TELEPORT_CANCELLED"));
    }
}
