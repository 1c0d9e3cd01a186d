//! Main entry point for the msgcat command line tool.

use anyhow::Context;
use clap::Parser;
use msgcat_cli::{App, Cli};
use msgcat_common::logging::{init_logging, LoggingConfig};
use msgcat_config::ConfigCache;
use std::sync::Arc;
use tracing::{error, info};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Read the log level before anything else logs.
    let config = ConfigCache::load(&cli.data_dir)
        .with_context(|| format!("loading configuration from {}", cli.data_dir.display()))?;
    let level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| config.get().log_level.clone());

    init_logging(LoggingConfig {
        level,
        compact: true,
        ..LoggingConfig::default()
    })
    .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?;

    info!("Opening data directory {}", cli.data_dir.display());
    let app = App::open_with_config(&cli.data_dir, Arc::new(config))?;

    match app.run(&cli.command) {
        Ok(output) => {
            println!("{output}");
            Ok(())
        }
        Err(e) => {
            error!("Command failed: {}", e);
            Err(e.into())
        }
    }
}
