//! Average word length.

use crate::text;

/// Mean length of the words in `text`.
///
/// Words are maximal ASCII-letter runs; punctuation and digits never count
/// toward length. Returns 0.0 when the text has no alphabetic token. No
/// rounding is applied — formatting is a presentation concern.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn average_word_length(text: &str) -> f64 {
    let words = text::tokenize(text);
    if words.is_empty() {
        return 0.0;
    }

    let total: usize = words.iter().map(|w| w.len()).sum();
    total as f64 / words.len() as f64
}
