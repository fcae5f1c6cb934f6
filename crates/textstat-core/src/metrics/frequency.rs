//! Most frequent word detection.

use std::cmp::Reverse;
use std::collections::HashMap;

use crate::text;

use super::reports::MostFrequentWord;

/// Find the most frequent word in `text`.
///
/// Words are maximal ASCII-letter runs, lowercased. Returns `None` when the
/// text has no alphabetic token. Ties break toward the word first seen in a
/// left-to-right scan, so the result is deterministic regardless of map
/// iteration order.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn most_frequent_word(text: &str) -> Option<MostFrequentWord> {
    let words = text::tokenize_lower(text);
    if words.is_empty() {
        return None;
    }

    // count + first-seen index per word
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for (idx, word) in words.iter().enumerate() {
        counts.entry(word.as_str()).or_insert((0, idx)).0 += 1;
    }

    counts
        .into_iter()
        .max_by_key(|&(_, (count, first_seen))| (count, Reverse(first_seen)))
        .map(|(word, (count, _))| MostFrequentWord {
            word: word.to_string(),
            count,
        })
}
