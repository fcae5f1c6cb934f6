//! Command implementations.

use anyhow::Context;
use camino::Utf8Path;
use tracing::debug;

pub mod count;
pub mod frequent;
pub mod info;
pub mod paragraphs;
pub mod sentences;
pub mod stats;
pub mod word_length;

/// The built-in sample news article, analyzed when no input file is given.
pub const SAMPLE_ARTICLE: &str = "\
The impact of artificial intelligence on modern society continues to grow.
Artificial intelligence is transforming industries across the globe!

Technology companies are investing billions in AI research. The development of
AI has accelerated rapidly in recent years. Many experts believe artificial
intelligence will revolutionize healthcare, education, and transportation.

However, concerns about AI ethics and job displacement remain significant.
Policymakers are working to establish regulations. The future of AI depends
on responsible development and implementation.

What will the next decade bring? Only time will tell. The AI revolution is
just beginning!
";

/// Read a file and validate its size against the configured limit.
///
/// Combines the file-read and size-validation steps that every analysis
/// command needs.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

/// Load the text to analyze: the given file, or the sample article.
///
/// An explicitly named file that cannot be read is an error; the sample
/// fallback applies only when no file was requested.
pub fn load_text(file: Option<&Utf8Path>, max_bytes: Option<usize>) -> anyhow::Result<String> {
    match file {
        Some(path) => read_input_file(path, max_bytes),
        None => {
            debug!("no input file given; using the sample article");
            Ok(SAMPLE_ARTICLE.to_string())
        }
    }
}

/// Display label for the analyzed input.
pub fn input_label(file: Option<&Utf8Path>) -> String {
    file.map_or_else(|| "(sample article)".to_string(), ToString::to_string)
}
