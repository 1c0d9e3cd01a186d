//! Structured logging bootstrap built on `tracing-subscriber`.

use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Configuration for the logging system
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "`msgcat_i18n=trace`")
    pub level: String,
    /// Whether to use the compact single-line format
    pub compact: bool,
    /// Optional file path for log output
    pub file_path: Option<String>,
    /// Whether to include spans in the output
    pub include_spans: bool,
    /// Whether to include target module information
    pub include_targets: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            compact: false,
            file_path: None,
            include_spans: false,
            include_targets: true,
        }
    }
}

/// Initialize the tracing subscriber with the given configuration
pub fn init_logging(config: LoggingConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let env_filter = EnvFilter::try_new(&config.level).or_else(|_| EnvFilter::try_new("info"))?;

    let span_events = if config.include_spans {
        FmtSpan::NEW | FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    let registry = tracing_subscriber::registry().with(env_filter);

    let layer = fmt::layer()
        .with_span_events(span_events)
        .with_target(config.include_targets);

    match (config.compact, config.file_path) {
        (true, Some(file_path)) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(file_path)?;
            registry.with(layer.compact().with_ansi(false).with_writer(file)).try_init()?;
        }
        (true, None) => registry.with(layer.compact()).try_init()?,
        (false, Some(file_path)) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(file_path)?;
            registry.with(layer.with_ansi(false).with_writer(file)).try_init()?;
        }
        (false, None) => registry.with(layer).try_init()?,
    }

    Ok(())
}

/// Initialize logging with default configuration
pub fn init_default_logging() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    init_logging(LoggingConfig::default())
}
