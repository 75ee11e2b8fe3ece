//! Structured logging for cordon
//!
//! Thin initialization layer over `tracing` with configurable format and an
//! optional log file. Initialize once at startup; later calls fail with
//! [`LogError::AlreadyInitialized`].
//!
//! # Correlation Fields
//!
//! Use these field names consistently in spans and events:
//! - `actor`: acting identity
//! - `which`: corner being set
//! - `world`: world identifier
//! - `sessions`: registry size after a lifecycle change

use std::io;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

use serde::{Deserialize, Serialize};
use tracing_subscriber::{EnvFilter, fmt};

pub use crate::config::LogFormat;

/// Global flag to track if logging has been initialized
static LOGGING_INITIALIZED: OnceLock<bool> = OnceLock::new();

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Log level filter (trace, debug, info, warn, error)
    /// Can be overridden by the RUST_LOG environment variable
    pub level: String,

    /// Output format (pretty or json)
    pub format: LogFormat,

    /// Optional path to a log file; when set, output goes there instead of
    /// stderr (useful for diagnostic bundles)
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
            file: None,
        }
    }
}

impl LogConfig {
    /// Build a log config from the general section of the main config.
    #[must_use]
    pub fn from_general(general: &crate::config::GeneralConfig) -> Self {
        Self {
            level: general.log_level.clone(),
            format: general.log_format,
            file: None,
        }
    }
}

/// Error type for logging initialization
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("logging already initialized")]
    AlreadyInitialized,

    #[error("invalid log level: {0}")]
    InvalidLevel(String),

    #[error("failed to create log file: {0}")]
    FileCreate(#[from] io::Error),

    #[error("failed to set global subscriber: {0}")]
    SetSubscriber(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Initialize global logging.
///
/// RUST_LOG takes precedence over the configured level when set.
pub fn init_logging(config: &LogConfig) -> Result<(), LogError> {
    if LOGGING_INITIALIZED.get().is_some() {
        return Err(LogError::AlreadyInitialized);
    }

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|_| LogError::InvalidLevel(config.level.clone()))?;

    match (&config.file, config.format) {
        (None, LogFormat::Pretty) => {
            let subscriber = fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        (None, LogFormat::Json) => {
            let subscriber = fmt()
                .json()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        (Some(path), format) => {
            let file = std::fs::File::create(path)?;
            let writer = Mutex::new(file);
            match format {
                LogFormat::Pretty => {
                    let subscriber = fmt()
                        .with_env_filter(filter)
                        .with_ansi(false)
                        .with_writer(writer)
                        .finish();
                    tracing::subscriber::set_global_default(subscriber)?;
                }
                LogFormat::Json => {
                    let subscriber = fmt()
                        .json()
                        .with_env_filter(filter)
                        .with_writer(writer)
                        .finish();
                    tracing::subscriber::set_global_default(subscriber)?;
                }
            }
        }
    }

    let _ = LOGGING_INITIALIZED.set(true);
    Ok(())
}
