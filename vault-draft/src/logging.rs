//! Logging setup for applications embedding the vault draft model.
//!
//! The library itself only emits `tracing` events. Hosts that have no
//! subscriber of their own can install one here.

use std::fs::{self, File};
use std::path::PathBuf;

use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::{LoggingError, LoggingResult};

/// Default name of the log file inside [`LogFileConfig::log_dir`].
pub const DEFAULT_LOG_FILE_NAME: &str = "vault-draft.log";

/// Guard that must be kept alive to flush buffered file output.
#[derive(Debug)]
pub struct LoggingGuard {
    _worker_guard: Option<WorkerGuard>,
}

/// Configuration for logging output.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter. If None, `RUST_LOG` is used, then INFO.
    pub level: Option<LevelFilter>,
    /// Whether to output logs to stderr.
    pub console: bool,
    /// Optional file output.
    pub file: Option<LogFileConfig>,
}

/// Configuration for log file output.
#[derive(Debug, Clone)]
pub struct LogFileConfig {
    /// Directory the log file is written to; created if missing.
    pub log_dir: PathBuf,
    /// File name inside `log_dir`; truncated on start.
    pub file_name: String,
}

impl LogFileConfig {
    pub fn new(log_dir: impl Into<PathBuf>) -> Self {
        Self {
            log_dir: log_dir.into(),
            file_name: DEFAULT_LOG_FILE_NAME.to_string(),
        }
    }
}

/// Initialize console-only logging with the given level.
pub fn init_console_logging(level: LevelFilter) -> LoggingResult<LoggingGuard> {
    init_logging(LoggingConfig {
        level: Some(level),
        console: true,
        file: None,
    })
}

/// Initialize logging with the given configuration.
///
/// If neither console nor file output is enabled, no subscriber is installed
/// and the returned guard does nothing.
///
/// # Errors
///
/// Returns an error if the log file cannot be created or a global subscriber
/// is already installed.
pub fn init_logging(config: LoggingConfig) -> LoggingResult<LoggingGuard> {
    if !config.console && config.file.is_none() {
        return Ok(LoggingGuard {
            _worker_guard: None,
        });
    }

    let env_filter = match config.level {
        Some(level) => EnvFilter::new(level.to_string()),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(LevelFilter::INFO.to_string())),
    };

    let (file_layer, guard) = if let Some(ref file_config) = config.file {
        let file = open_log_file(file_config)?;
        let (non_blocking, guard) = tracing_appender::non_blocking(file);
        let layer = fmt::layer().with_target(true).with_ansi(false).with_writer(non_blocking);
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    let console_layer = config.console.then(|| fmt::layer().with_target(true));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .try_init()
        .map_err(|e| LoggingError::SubscriberInit(e.to_string()))?;

    Ok(LoggingGuard {
        _worker_guard: guard,
    })
}

fn open_log_file(config: &LogFileConfig) -> LoggingResult<File> {
    fs::create_dir_all(&config.log_dir)?;
    Ok(File::create(config.log_dir.join(&config.file_name))?)
}
