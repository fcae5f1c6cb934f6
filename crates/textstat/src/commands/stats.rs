//! Stats command — all five text statistics in one report.

use anyhow::{Context, bail};
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use textstat_core::metrics::{self, ALL_METRICS};

use super::{input_label, load_text};

/// Arguments for the `stats` subcommand.
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// File to analyze. Omit to analyze the built-in sample article.
    pub file: Option<Utf8PathBuf>,

    /// Word to count occurrences of. Falls back to the configured default.
    #[arg(short, long)]
    pub word: Option<String>,

    /// Metrics to run (comma-separated). Omit for all metrics.
    #[arg(long, value_delimiter = ',')]
    pub metrics: Option<Vec<String>>,

    /// Metrics to skip (comma-separated).
    #[arg(long, value_delimiter = ',', conflicts_with = "metrics")]
    pub exclude: Option<Vec<String>>,
}

/// Run the selected text statistics on a file (or the sample article).
#[instrument(name = "cmd_stats", skip_all, fields(file = ?args.file))]
pub fn cmd_stats(
    args: StatsArgs,
    global_json: bool,
    config_default_word: Option<&str>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = ?args.file, word = ?args.word, metrics = ?args.metrics, "executing stats command");

    let content = load_text(args.file.as_deref(), max_input_bytes)?;
    let label = input_label(args.file.as_deref());

    let word = args.word.as_deref().or(config_default_word);

    let selected = match (&args.metrics, &args.exclude) {
        (Some(list), _) => Some(list.clone()),
        (None, Some(excluded)) => {
            for name in excluded {
                if !ALL_METRICS.contains(&name.as_str()) {
                    bail!("unknown metric: {name}. Use: {}", ALL_METRICS.join(", "));
                }
            }
            Some(
                ALL_METRICS
                    .iter()
                    .filter(|m| !excluded.iter().any(|e| e == *m))
                    .map(ToString::to_string)
                    .collect(),
            )
        }
        (None, None) => None,
    };

    let report = metrics::run_stats(&content, word, selected.as_deref())
        .with_context(|| format!("failed to analyze {label}"))?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    // Text output — section by section
    println!("{}", label.bold());

    if let Some(ref o) = report.occurrences {
        println!(
            "\n  {} \"{}\" appears {} time{}",
            "Occurrences:".cyan(),
            o.word,
            o.count,
            if o.count == 1 { "" } else { "s" },
        );
    }

    match report.most_frequent {
        Some(Some(ref m)) => println!(
            "\n  {} \"{}\" ({} time{})",
            "Most frequent:".cyan(),
            m.word,
            m.count,
            if m.count == 1 { "" } else { "s" },
        ),
        Some(None) => println!("\n  {} (no words)", "Most frequent:".cyan()),
        None => {}
    }

    if let Some(ref a) = report.average_word_length {
        println!(
            "\n  {} {:.2} characters ({} words)",
            "Avg word length:".cyan(),
            a.average,
            a.word_count,
        );
    }

    if let Some(ref p) = report.paragraphs {
        println!("\n  {} {}", "Paragraphs:".cyan(), p.count);
    }

    if let Some(ref s) = report.sentences {
        println!("\n  {} {}", "Sentences:".cyan(), s.count);
    }

    Ok(())
}
