//! Report structs for text statistics.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for
//! use in CLI JSON output and downstream consumers.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Full statistics report combining all requested metrics.
///
/// Metrics that were not selected (or, for occurrences, had no search word)
/// are omitted from serialized output.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TextStatsReport {
    /// Whole-word occurrence count for the search word.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occurrences: Option<WordOccurrences>,
    /// Most frequent word. `Some` when the metric ran; the inner option is
    /// the absence-marker for text with no alphabetic token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub most_frequent: Option<Option<MostFrequentWord>>,
    /// Average word length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_word_length: Option<AverageWordLength>,
    /// Paragraph count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paragraphs: Option<ParagraphCount>,
    /// Sentence count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentences: Option<SentenceCount>,
}

/// Whole-word occurrence count for a search word.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct WordOccurrences {
    /// The search word (lowercased).
    pub word: String,
    /// Number of whole-word, case-insensitive matches.
    pub count: usize,
}

/// The most frequent word in a text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MostFrequentWord {
    /// The word (lowercased).
    pub word: String,
    /// Number of occurrences.
    pub count: usize,
}

/// Average word length data.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AverageWordLength {
    /// Mean word length in characters (unrounded).
    pub average: f64,
    /// Number of words measured.
    pub word_count: usize,
}

/// Paragraph count data.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ParagraphCount {
    /// Number of paragraphs (at least 1).
    pub count: usize,
}

/// Sentence count data.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SentenceCount {
    /// Number of sentences (at least 1).
    pub count: usize,
}
