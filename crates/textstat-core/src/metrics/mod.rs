//! Text statistics metrics.
//!
//! Five independent, stateless metrics over an input string, orchestrated
//! by [`run_stats`]. Each metric is a pure, total function in its own
//! module; callers can also invoke metrics individually.

pub mod frequency;
pub mod occurrences;
pub mod paragraphs;
pub mod reports;
pub mod sentences;
pub mod word_length;

use std::collections::HashSet;

pub use reports::TextStatsReport;

use crate::error::{AnalysisError, AnalysisResult};
use crate::text;

use reports::{AverageWordLength, ParagraphCount, SentenceCount, WordOccurrences};

/// All available metric names.
pub const ALL_METRICS: &[&str] = &[
    "occurrences",
    "frequency",
    "word_length",
    "paragraphs",
    "sentences",
];

/// Run the selected metrics over `input`.
///
/// # Arguments
///
/// * `input` — The text to analyze.
/// * `search_word` — Word for the occurrences metric. When `None`, that
///   metric is reported as absent rather than failing.
/// * `metrics` — Optional list of metric names to run. If `None`, runs all.
///
/// # Errors
///
/// Returns [`AnalysisError::UnknownMetric`] if `metrics` names a metric
/// that does not exist. The metrics themselves never fail.
#[tracing::instrument(skip(input), fields(text_len = input.len()))]
pub fn run_stats(
    input: &str,
    search_word: Option<&str>,
    metrics: Option<&[String]>,
) -> AnalysisResult<TextStatsReport> {
    if let Some(list) = metrics {
        for name in list {
            if !ALL_METRICS.contains(&name.as_str()) {
                return Err(AnalysisError::UnknownMetric {
                    name: name.clone(),
                    available: ALL_METRICS.join(", "),
                });
            }
        }
    }

    let enabled: HashSet<&str> = metrics.map_or_else(
        || ALL_METRICS.iter().copied().collect(),
        |list| list.iter().map(String::as_str).collect(),
    );

    let occurrences = if enabled.contains("occurrences") {
        search_word
            .filter(|w| !w.is_empty())
            .map(|word| WordOccurrences {
                word: word.to_lowercase(),
                count: occurrences::count_occurrences(input, word),
            })
    } else {
        None
    };

    let most_frequent = if enabled.contains("frequency") {
        Some(frequency::most_frequent_word(input))
    } else {
        None
    };

    let average_word_length = if enabled.contains("word_length") {
        Some(AverageWordLength {
            average: word_length::average_word_length(input),
            word_count: text::tokenize(input).len(),
        })
    } else {
        None
    };

    let paragraphs = if enabled.contains("paragraphs") {
        Some(ParagraphCount {
            count: paragraphs::count_paragraphs(input),
        })
    } else {
        None
    };

    let sentences = if enabled.contains("sentences") {
        Some(SentenceCount {
            count: sentences::count_sentences(input),
        })
    } else {
        None
    };

    Ok(TextStatsReport {
        occurrences,
        most_frequent,
        average_word_length,
        paragraphs,
        sentences,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARTICLE: &str = "The cat sat on the mat. The dog ran fast!\n\n\
                           What will the next decade bring? Only time will tell.";

    #[test]
    fn all_metrics_run() {
        let report = run_stats(ARTICLE, Some("the"), None).unwrap();
        assert_eq!(report.occurrences.as_ref().unwrap().count, 4);
        assert_eq!(report.most_frequent.as_ref().unwrap().as_ref().unwrap().word, "the");
        assert_eq!(report.paragraphs.as_ref().unwrap().count, 2);
        assert_eq!(report.sentences.as_ref().unwrap().count, 4);
        assert!(report.average_word_length.as_ref().unwrap().average > 0.0);
    }

    #[test]
    fn selective_metrics() {
        let selected = vec!["paragraphs".to_string(), "sentences".to_string()];
        let report = run_stats(ARTICLE, None, Some(&selected)).unwrap();
        assert!(report.paragraphs.is_some());
        assert!(report.sentences.is_some());
        assert!(report.occurrences.is_none());
        assert!(report.most_frequent.is_none());
        assert!(report.average_word_length.is_none());
    }

    #[test]
    fn unknown_metric_errors() {
        let selected = vec!["syllables".to_string()];
        let err = run_stats(ARTICLE, None, Some(&selected)).unwrap_err();
        assert!(err.to_string().contains("syllables"));
        assert!(err.to_string().contains("paragraphs"));
    }

    #[test]
    fn missing_search_word_skips_occurrences() {
        let report = run_stats(ARTICLE, None, None).unwrap();
        assert!(report.occurrences.is_none());
        assert!(report.most_frequent.is_some());
    }

    #[test]
    fn empty_search_word_skips_occurrences() {
        let report = run_stats(ARTICLE, Some(""), None).unwrap();
        assert!(report.occurrences.is_none());
    }

    #[test]
    fn empty_input_yields_sentinels() {
        let report = run_stats("", Some("word"), None).unwrap();
        assert_eq!(report.occurrences.as_ref().unwrap().count, 0);
        assert!(report.most_frequent.as_ref().unwrap().is_none());
        assert_eq!(report.average_word_length.as_ref().unwrap().average, 0.0);
        assert_eq!(report.paragraphs.as_ref().unwrap().count, 1);
        assert_eq!(report.sentences.as_ref().unwrap().count, 1);
    }

    #[test]
    fn metrics_are_idempotent() {
        let a = run_stats(ARTICLE, Some("cat"), None).unwrap();
        let b = run_stats(ARTICLE, Some("cat"), None).unwrap();
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn json_omits_unselected_metrics() {
        let selected = vec!["frequency".to_string()];
        let report = run_stats(ARTICLE, None, Some(&selected)).unwrap();
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("most_frequent"));
        assert!(!json.contains("paragraphs"));
    }
}
