//! Logging and tracing initialization.
//!
//! Diagnostics go to a log file when one is configured (so they never mix
//! with the command's stdout output), and to stderr otherwise. The filter
//! is driven by `--quiet`/`--verbose`, `RUST_LOG`, and the configured
//! log level, in that order.

use std::fs::OpenOptions;
use std::path::PathBuf;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Where diagnostic output should go.
#[derive(Debug, Default)]
pub struct ObservabilityConfig {
    /// Explicit log file path (`TEXTSTAT_LOG_PATH`).
    pub log_path: Option<PathBuf>,
    /// Log directory (`TEXTSTAT_LOG_DIR`, or `log_dir` from config).
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Build from environment variables, with the config file's `log_dir`
    /// as a fallback for the directory.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        Self {
            log_path: std::env::var_os("TEXTSTAT_LOG_PATH").map(PathBuf::from),
            log_dir: std::env::var_os("TEXTSTAT_LOG_DIR")
                .map(PathBuf::from)
                .or(config_log_dir),
        }
    }

    /// Resolve the log file path, if any destination is configured.
    fn resolved_path(&self) -> Option<PathBuf> {
        self.log_path
            .clone()
            .or_else(|| self.log_dir.as_ref().map(|dir| dir.join("textstat.log")))
    }
}

/// Build the log filter from CLI flags and the configured level.
///
/// `--quiet` and `--verbose` take priority; otherwise `RUST_LOG` applies,
/// falling back to the config file's log level.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    if quiet {
        return EnvFilter::new("error");
    }
    match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config_level)),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    }
}

/// Initialize the global tracing subscriber.
///
/// Returns a [`WorkerGuard`] when file logging is active; the guard must be
/// held for the lifetime of the process so buffered log lines are flushed.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    match config.resolved_path() {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create log directory {}", parent.display()))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
            Ok(None)
        }
    }
}
