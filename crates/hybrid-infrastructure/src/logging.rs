//! Structured logging with tracing
//!
//! Provides centralized logging configuration using the tracing ecosystem:
//! human-readable or JSON output on stdout, and an optional daily rolling file
//! with bounded retention.

use crate::constants::{DEFAULT_LOG_FILE_STEM, LOG_ENV_VAR};
use hybrid_domain::error::{Error, Result};

// Re-export LoggingConfig for convenience
pub use crate::config::LoggingConfig;
use std::path::Path;
use tracing::{Level, info, warn};
use tracing_appender::rolling::{Builder, RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with the provided configuration
///
/// `HYBRID_LOG` takes precedence over the configured level. Fails when a global
/// subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(&config.level));

    let file_appender = file_appender(config)?;

    // Layer types differ per format, so each branch builds its own stack
    let result = if config.json_format {
        let stdout = fmt::layer().json().with_target(true).with_thread_names(true);
        let registry = Registry::default().with(filter);
        if let Some(appender) = file_appender {
            let file = fmt::layer()
                .json()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true);
            registry.with(stdout).with(file).try_init()
        } else {
            registry.with(stdout).try_init()
        }
    } else {
        let stdout = fmt::layer().with_target(true).with_thread_names(true);
        let registry = Registry::default().with(filter);
        if let Some(appender) = file_appender {
            let file = fmt::layer()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true);
            registry.with(stdout).with(file).try_init()
        } else {
            registry.with(stdout).try_init()
        }
    };

    result.map_err(|e| Error::configuration_with_source("Failed to initialize logging", e))?;

    info!("Logging initialized with level: {}", level);
    Ok(())
}

/// Daily rolling appender for `file_output`, keeping at most `max_files` files
///
/// Returns `None` when no file output is configured.
pub fn file_appender(config: &LoggingConfig) -> Result<Option<RollingFileAppender>> {
    let Some(path) = config.file_output.as_ref() else {
        return Ok(None);
    };
    if config.max_files == 0 {
        return Err(Error::configuration("Log file retention (max_files) cannot be 0"));
    }

    let directory = path.parent().unwrap_or_else(|| Path::new("."));
    let prefix = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(DEFAULT_LOG_FILE_STEM);

    Builder::new()
        .rotation(Rotation::DAILY)
        .filename_prefix(prefix)
        .max_log_files(config.max_files)
        .build(directory)
        .map(Some)
        .map_err(|e| Error::configuration_with_source("Failed to create log file appender", e))
}

/// Parse log level string to tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::configuration(format!(
            "Invalid log level: {}. Use trace, debug, info, warn, or error",
            level
        ))),
    }
}

/// Log configuration loading status
pub fn log_config_loaded(config_path: &Path, success: bool) {
    if success {
        info!("Configuration loaded from {}", config_path.display());
    } else {
        warn!("Configuration file not found: {}", config_path.display());
    }
}
