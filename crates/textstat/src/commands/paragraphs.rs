//! Paragraphs command — paragraph counting.

use camino::Utf8PathBuf;
use clap::Args;
use tracing::{debug, instrument};

use textstat_core::metrics::paragraphs;
use textstat_core::metrics::reports::ParagraphCount;

use super::load_text;

/// Arguments for the `paragraphs` subcommand.
#[derive(Args, Debug)]
pub struct ParagraphsArgs {
    /// File to analyze. Omit to analyze the built-in sample article.
    pub file: Option<Utf8PathBuf>,
}

/// Count paragraphs in a file (or the sample article).
#[instrument(name = "cmd_paragraphs", skip_all, fields(file = ?args.file))]
pub fn cmd_paragraphs(
    args: ParagraphsArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = ?args.file, "executing paragraphs command");

    let content = load_text(args.file.as_deref(), max_input_bytes)?;
    let count = paragraphs::count_paragraphs(&content);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&ParagraphCount { count })?);
    } else {
        println!("{count}");
    }

    Ok(())
}
