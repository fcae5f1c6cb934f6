//! Sentences command — sentence counting.

use camino::Utf8PathBuf;
use clap::Args;
use tracing::{debug, instrument};

use textstat_core::metrics::reports::SentenceCount;
use textstat_core::metrics::sentences;

use super::load_text;

/// Arguments for the `sentences` subcommand.
#[derive(Args, Debug)]
pub struct SentencesArgs {
    /// File to analyze. Omit to analyze the built-in sample article.
    pub file: Option<Utf8PathBuf>,
}

/// Count sentences in a file (or the sample article).
#[instrument(name = "cmd_sentences", skip_all, fields(file = ?args.file))]
pub fn cmd_sentences(
    args: SentencesArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = ?args.file, "executing sentences command");

    let content = load_text(args.file.as_deref(), max_input_bytes)?;
    let count = sentences::count_sentences(&content);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&SentenceCount { count })?);
    } else {
        println!("{count}");
    }

    Ok(())
}
