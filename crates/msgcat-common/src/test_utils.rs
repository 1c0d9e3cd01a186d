//! Test utilities and shared test helpers for the msgcat workspace.
//!
//! This module provides common fixtures and helper functions that can be
//! used across all crates in the workspace for unit and integration testing.

use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// Create a temporary directory for tests that automatically cleans up.
#[cfg(feature = "tempfile")]
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Write `contents` to `<data_dir>/language/<tag>.yml`, creating the directory.
pub fn write_language_file(data_dir: &Path, tag: &str, contents: &str) -> PathBuf {
    let language_dir = data_dir.join("language");
    std::fs::create_dir_all(&language_dir).expect("Failed to create language directory");
    let path = language_dir.join(format!("{tag}.yml"));
    std::fs::write(&path, contents).expect("Failed to write language file");
    path
}

/// Write `contents` to `<data_dir>/config.yml`.
pub fn write_config_file(data_dir: &Path, contents: &str) -> PathBuf {
    std::fs::create_dir_all(data_dir).expect("Failed to create data directory");
    let path = data_dir.join("config.yml");
    std::fs::write(&path, contents).expect("Failed to write config file");
    path
}

/// Language file fixtures.
pub mod language_fixtures {
    /// A complete English language file.
    pub fn english_yaml() -> &'static str {
        r#"
MESSAGES:
  COMMAND_SUCCESS_HOME:
    enabled: true
    repeat-delay: 0
    string: "Welcome home, %PLAYER_NAME%."
  TELEPORT_COOLDOWN:
    enabled: true
    repeat-delay: 5
    string: "You must wait %DURATION% before teleporting again."
  TELEPORT_CANCELLED:
    enabled: false
    repeat-delay: 10
    string: "Teleport cancelled."

ITEM_INFO:
  ITEM_NAME: "Spawn Star"
  ITEM_NAME_PLURAL: "Spawn Stars"
  INVENTORY_ITEM_NAME: "Inventory Spawn Star"
  ITEM_LORE:
    - "Use to return"
    - "to world spawn."

SPAWN_DISPLAY_NAME: "Spawn"
HOME_DISPLAY_NAME: "Home"

TIME_STRINGS:
  DAY: "day"
  DAY_PLURAL: "days"
  HOUR: "hour"
  HOUR_PLURAL: "hours"
  MINUTE: "minute"
  MINUTE_PLURAL: "minutes"
  SECOND: "second"
  SECOND_PLURAL: "seconds"
  LESS_THAN: "less than"
  UNLIMITED: "unlimited"
"#
    }

    /// A partial French language file; only some keys are translated.
    pub fn french_partial_yaml() -> &'static str {
        r#"
MESSAGES:
  COMMAND_SUCCESS_HOME:
    string: "Bienvenue chez vous, %PLAYER_NAME%."

ITEM_INFO:
  ITEM_NAME: "Étoile de spawn"

TIME_STRINGS:
  DAY: "jour"
  DAY_PLURAL: "jours"
  LESS_THAN: "moins de"
"#
    }

    /// YAML that does not parse.
    pub fn malformed_yaml() -> &'static str {
        "MESSAGES:\n  COMMAND_SUCCESS_HOME: [unterminated\n    string: \"oops\n"
    }
}
