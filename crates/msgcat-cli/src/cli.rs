//! Command line arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Inspect the message catalog a data directory would serve.
#[derive(Parser, Debug, Clone)]
#[command(name = "msgcat", version, about)]
pub struct Cli {
    /// Directory holding `config.yml` and `language/`.
    #[arg(long, global = true, default_value = ".", env = "MSGCAT_DATA_DIR")]
    pub data_dir: PathBuf,

    /// Log filter, overriding `log-level` from `config.yml`.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// What to print.
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show one message: enabled flag, repeat delay and text.
    Show {
        /// Message id as written in the language file, e.g. `TELEPORT_COOLDOWN`.
        id: String,

        /// Placeholder value as `KEY=VALUE`; may be repeated.
        #[arg(long = "macro", short = 'm', value_parser = parse_macro)]
        macros: Vec<(String, String)>,
    },

    /// Show the item names, lore and display names.
    Item,

    /// Format a duration given in milliseconds.
    Time {
        /// Duration in milliseconds.
        #[arg(allow_negative_numbers = true)]
        millis: i64,

        /// Smallest unit to print: days, hours, minutes or seconds.
        #[arg(long, short)]
        granularity: Option<String>,
    },

    /// Copy the bundled language files into the data directory.
    Install,

    /// Report the resolved language and messages without text.
    Check,
}

/// Parses `KEY=VALUE`.
pub fn parse_macro(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got `{raw}`")),
    }
}
