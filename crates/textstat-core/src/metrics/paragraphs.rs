//! Paragraph counting.

use crate::text;

/// Count paragraphs: blocks of non-blank lines separated by blank lines.
///
/// Empty text counts as one paragraph (a defined edge case, not an error);
/// the count is floored at 1 for any input.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn count_paragraphs(text: &str) -> usize {
    text::split_paragraphs(text).len().max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_one_paragraph() {
        assert_eq!(count_paragraphs(""), 1);
        assert_eq!(count_paragraphs("   \n  \n"), 1);
    }

    #[test]
    fn single_block() {
        assert_eq!(count_paragraphs("Just one paragraph\nwith two lines."), 1);
    }

    #[test]
    fn blank_line_separated_blocks() {
        assert_eq!(count_paragraphs("A\n\nB\n\nC"), 3);
    }

    #[test]
    fn multiple_blank_lines_collapse() {
        assert_eq!(count_paragraphs("A\n\n\n\nB"), 2);
    }

    #[test]
    fn whitespace_only_separator_lines() {
        assert_eq!(count_paragraphs("A\n \t \nB"), 2);
    }

    #[test]
    fn surrounding_blank_lines_ignored() {
        assert_eq!(count_paragraphs("\n\nA\n\nB\n\n"), 2);
    }
}
