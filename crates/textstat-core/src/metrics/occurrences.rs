//! Whole-word occurrence counting.

use regex::Regex;

/// Count case-insensitive, whole-word occurrences of `word` in `text`.
///
/// Fails closed: returns 0 when either input is empty. The search word is
/// escaped before compilation, so regex metacharacters in it match
/// literally. Whole-word means bounded by non-word characters or the
/// string edges, so "art" never matches inside "artificial".
#[tracing::instrument(skip_all, fields(text_len = text.len(), word))]
pub fn count_occurrences(text: &str, word: &str) -> usize {
    if text.is_empty() || word.is_empty() {
        return 0;
    }

    let pattern = format!(r"\b{}\b", regex::escape(&word.to_lowercase()));
    let re = Regex::new(&pattern).expect("escaped pattern is valid");
    re.find_iter(&text.to_lowercase()).count()
}
