//! Sentence counting.

use crate::text;

/// Count sentences: segments separated by runs of `.`, `!`, `?` that are
/// followed by whitespace or end-of-text.
///
/// A terminator glued to the next character ("3.14", "Mr.Smith") is not a
/// boundary. Empty text counts as one sentence; the count is floored at 1.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn count_sentences(text: &str) -> usize {
    text::split_sentences(text).len().max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_one_sentence() {
        assert_eq!(count_sentences(""), 1);
        assert_eq!(count_sentences("  \n"), 1);
    }

    #[test]
    fn basic_counting() {
        assert_eq!(count_sentences("Hi. Bye!"), 2);
        assert_eq!(count_sentences("One. Two? Three!"), 3);
    }

    #[test]
    fn abbreviation_period_not_followed_by_space() {
        assert_eq!(count_sentences("Mr.Smith arrived."), 1);
    }

    #[test]
    fn abbreviation_followed_by_space_splits() {
        // "Mr. Smith" does split — the heuristic is lookahead-only,
        // preserved from the observed behavior.
        assert_eq!(count_sentences("Mr. Smith arrived."), 2);
    }

    #[test]
    fn decimal_numbers_not_split() {
        assert_eq!(count_sentences("Pi is 3.14 give or take."), 1);
    }

    #[test]
    fn terminator_runs_count_once() {
        assert_eq!(count_sentences("What?! No way... Really."), 3);
    }

    #[test]
    fn no_terminator_is_one_sentence() {
        assert_eq!(count_sentences("no punctuation at all"), 1);
    }

    #[test]
    fn trailing_fragment_counts() {
        assert_eq!(count_sentences("Done. And then"), 2);
    }
}
