//! Frequent command — most frequent word.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use textstat_core::metrics::frequency;

use super::load_text;

/// Arguments for the `frequent` subcommand.
#[derive(Args, Debug)]
pub struct FrequentArgs {
    /// File to analyze. Omit to analyze the built-in sample article.
    pub file: Option<Utf8PathBuf>,
}

/// Find the most frequent word in a file (or the sample article).
#[instrument(name = "cmd_frequent", skip_all, fields(file = ?args.file))]
pub fn cmd_frequent(
    args: FrequentArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = ?args.file, "executing frequent command");

    let content = load_text(args.file.as_deref(), max_input_bytes)?;
    let winner = frequency::most_frequent_word(&content);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&winner)?);
    } else {
        match winner {
            Some(m) => println!("{} ({} time{})", m.word, m.count, if m.count == 1 { "" } else { "s" }),
            None => println!("{}", "(no words)".dimmed()),
        }
    }

    Ok(())
}
