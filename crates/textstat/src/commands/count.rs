//! Count command — whole-word occurrence counting.

use camino::Utf8PathBuf;
use clap::Args;
use tracing::{debug, instrument};

use textstat_core::metrics::occurrences;
use textstat_core::metrics::reports::WordOccurrences;

use super::load_text;

/// Arguments for the `count` subcommand.
#[derive(Args, Debug)]
pub struct CountArgs {
    /// Word to count (case-insensitive, whole words only).
    pub word: String,

    /// File to analyze. Omit to analyze the built-in sample article.
    pub file: Option<Utf8PathBuf>,
}

/// Count whole-word occurrences of a word in a file (or the sample article).
#[instrument(name = "cmd_count", skip_all, fields(word = %args.word, file = ?args.file))]
pub fn cmd_count(
    args: CountArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(word = %args.word, "executing count command");

    let content = load_text(args.file.as_deref(), max_input_bytes)?;
    let count = occurrences::count_occurrences(&content, &args.word);

    if global_json {
        let report = WordOccurrences {
            word: args.word.to_lowercase(),
            count,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{count}");
    }

    Ok(())
}
