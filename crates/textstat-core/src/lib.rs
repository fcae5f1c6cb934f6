//! Core library for textstat.
//!
//! This crate provides the text statistics used by the `textstat` CLI and
//! any downstream consumers.
//!
//! # Modules
//!
//! - [`metrics`] - The five statistics and their orchestrator
//! - [`text`] - Word, paragraph, and sentence splitting
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use textstat_core::metrics;
//!
//! let report = metrics::run_stats("Hi there. Bye!", Some("hi"), None)
//!     .expect("metric names are valid");
//!
//! assert_eq!(report.sentences.unwrap().count, 2);
//! assert_eq!(report.occurrences.unwrap().count, 1);
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod metrics;
pub mod text;

pub use config::{Config, ConfigLoader, LogLevel};
pub use error::{AnalysisError, AnalysisResult, ConfigError, ConfigResult};
pub use metrics::{ALL_METRICS, TextStatsReport};

/// Default maximum input size in bytes (5 MiB).
///
/// Guards the CLI against accidentally reading huge files; casual analysis
/// of short documents never comes close to this.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
