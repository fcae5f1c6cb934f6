//! Text splitting utilities.
//!
//! Provides word extraction, paragraph splitting, and sentence splitting
//! for use by the metric modules.

use regex::Regex;
use std::sync::LazyLock;

/// Regex for a maximal run of ASCII letters.
static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z]+").expect("valid regex"));

/// Regex for a paragraph break: one or more blank lines, where a blank
/// line may contain only whitespace.
static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("valid regex"));

/// Extract words as maximal ASCII-letter runs, original case preserved.
pub fn tokenize(text: &str) -> Vec<&str> {
    WORD_PATTERN.find_iter(text).map(|m| m.as_str()).collect()
}

/// Extract words as maximal ASCII-letter runs, lowercased.
pub fn tokenize_lower(text: &str) -> Vec<String> {
    WORD_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_ascii_lowercase())
        .collect()
}

/// Split text into paragraphs (blocks separated by blank lines).
///
/// Leading/trailing whitespace is trimmed first; blank blocks are discarded.
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    PARAGRAPH_BREAK
        .split(text.trim())
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

/// Split text into sentence segments.
///
/// A boundary is a run of one or more of `.`, `!`, `?` followed by
/// whitespace or end-of-text. A terminator glued to the next character
/// ("3.14", "Mr.Smith") is not a boundary. Blank segments are discarded.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn split_sentences(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut i = 0;

    while i < chars.len() {
        if is_terminator(chars[i]) {
            let mut j = i + 1;
            while j < chars.len() && is_terminator(chars[j]) {
                j += 1;
            }

            if j == chars.len() || chars[j].is_whitespace() {
                let segment = current.trim();
                if !segment.is_empty() {
                    segments.push(segment.to_string());
                }
                current.clear();
            } else {
                // Terminator run mid-token: keep it in the segment.
                current.extend(&chars[i..j]);
            }
            i = j;
        } else {
            current.push(chars[i]);
            i += 1;
        }
    }

    // Remaining text
    let segment = current.trim();
    if !segment.is_empty() {
        segments.push(segment.to_string());
    }

    segments
}

const fn is_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_splits_on_non_letters() {
        assert_eq!(tokenize("Hello, world!"), vec!["Hello", "world"]);
        assert_eq!(tokenize("don't"), vec!["don", "t"]);
        assert_eq!(tokenize("3.14 and x2y"), vec!["and", "x", "y"]);
    }

    #[test]
    fn tokenize_empty_and_non_alphabetic() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("123 456 --- !!!").is_empty());
    }

    #[test]
    fn tokenize_lower_folds_case() {
        assert_eq!(tokenize_lower("The THE the"), vec!["the", "the", "the"]);
    }

    #[test]
    fn paragraphs_split_on_blank_lines() {
        let paras = split_paragraphs("First paragraph.\n\nSecond paragraph.\n\nThird.");
        assert_eq!(paras.len(), 3);
        assert_eq!(paras[0], "First paragraph.");
    }

    #[test]
    fn paragraphs_whitespace_only_lines_are_blank() {
        let paras = split_paragraphs("A\n   \nB");
        assert_eq!(paras, vec!["A", "B"]);
    }

    #[test]
    fn paragraphs_multiple_blank_lines_collapse() {
        let paras = split_paragraphs("A\n\n\n\nB");
        assert_eq!(paras, vec!["A", "B"]);
    }

    #[test]
    fn basic_sentences() {
        let sentences = split_sentences("This is a sentence. This is another sentence.");
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0], "This is a sentence");
        assert_eq!(sentences[1], "This is another sentence");
    }

    #[test]
    fn terminator_runs_are_one_boundary() {
        let sentences = split_sentences("Really?! Yes... I mean it.");
        assert_eq!(sentences.len(), 3);
    }

    #[test]
    fn glued_terminator_is_not_a_boundary() {
        let sentences = split_sentences("Mr.Smith arrived.");
        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0], "Mr.Smith arrived");
    }

    #[test]
    fn decimal_not_split() {
        let sentences = split_sentences("The price is 3.14 dollars.");
        assert_eq!(sentences.len(), 1);
    }

    #[test]
    fn empty_input() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   ").is_empty());
    }

    #[test]
    fn trailing_text_without_terminator() {
        let sentences = split_sentences("One done. still going");
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[1], "still going");
    }
}
