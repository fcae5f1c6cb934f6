//! Error types for textstat-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur when running text statistics.
///
/// The metric functions themselves are total — every malformed input maps
/// to a sentinel result (0, `None`, 0.0). The only failure surface is
/// metric-name validation in the orchestrator.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// An unknown metric name was requested.
    #[error("unknown metric: {name}. Use: {available}")]
    UnknownMetric {
        /// The metric name that was requested.
        name: String,
        /// Comma-separated list of available metric names.
        available: String,
    },
}

/// Result type alias using [`AnalysisError`].
pub type AnalysisResult<T> = Result<T, AnalysisError>;
