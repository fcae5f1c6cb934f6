//! Word-length command — average word length.

use camino::Utf8PathBuf;
use clap::Args;
use tracing::{debug, instrument};

use textstat_core::metrics::word_length;
use textstat_core::metrics::reports::AverageWordLength;
use textstat_core::text;

use super::load_text;

/// Arguments for the `word-length` subcommand.
#[derive(Args, Debug)]
pub struct WordLengthArgs {
    /// File to analyze. Omit to analyze the built-in sample article.
    pub file: Option<Utf8PathBuf>,
}

/// Compute the average word length of a file (or the sample article).
///
/// The core value is unrounded; the two-decimal formatting here is purely
/// presentational.
#[instrument(name = "cmd_word_length", skip_all, fields(file = ?args.file))]
pub fn cmd_word_length(
    args: WordLengthArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = ?args.file, "executing word-length command");

    let content = load_text(args.file.as_deref(), max_input_bytes)?;
    let average = word_length::average_word_length(&content);

    if global_json {
        let report = AverageWordLength {
            average,
            word_count: text::tokenize(&content).len(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{average:.2}");
    }

    Ok(())
}
