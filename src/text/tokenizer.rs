//! Tokenization of raw page text.

use crate::text::repair::{is_bare_consonant, repair_text};

/// Converts one page's raw extracted text into cleaned word tokens.
///
/// The pipeline is: collapse line breaks (concatenating without inserting
/// spaces), run the repair scan ([`repair_text`]), lowercase, split on
/// single spaces, and drop empty strings and bare consonant artifacts.
///
/// Tokenization is pure text work; any further transformation (such as
/// lemmatization) is applied by the caller through a
/// [`crate::preprocess::Preprocessor`].
///
/// # Example
///
/// ```
/// use zipf_oxide::text::Tokenizer;
///
/// let tokenizer = Tokenizer::new();
/// assert_eq!(tokenizer.tokenize("wordNext"), vec!["word", "next"]);
/// assert_eq!(tokenizer.tokenize("some-\nthing"), vec!["something"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer;

impl Tokenizer {
    /// Create a new tokenizer.
    pub fn new() -> Self {
        Self
    }

    /// Tokenize one page's raw text into cleaned, lowercased word tokens.
    ///
    /// Empty input yields an empty sequence. The output never contains an
    /// empty string or a bare consonant artifact.
    pub fn tokenize(&self, raw_text: &str) -> Vec<String> {
        let dense_text = raw_text.replace(['\n', '\r'], "");
        let cleaned = repair_text(&dense_text).to_lowercase();

        cleaned
            .split(' ')
            .filter(|word| !word.is_empty() && !is_bare_consonant(word))
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert!(Tokenizer::new().tokenize("").is_empty());
    }

    #[test]
    fn test_simple_words() {
        assert_eq!(
            Tokenizer::new().tokenize("cat cat dog"),
            vec!["cat", "cat", "dog"]
        );
    }

    #[test]
    fn test_case_transition_repair() {
        assert_eq!(Tokenizer::new().tokenize("wordNext"), vec!["word", "next"]);
    }

    #[test]
    fn test_hyphen_rejoin_across_line_break() {
        assert_eq!(Tokenizer::new().tokenize("some-\nthing"), vec!["something"]);
    }

    #[test]
    fn test_line_breaks_collapse_without_space() {
        // Concatenation is deliberate: the repair scan, not the line
        // structure, decides where word boundaries go.
        assert_eq!(Tokenizer::new().tokenize("go\nOn"), vec!["go", "on"]);
        assert_eq!(Tokenizer::new().tokenize("con\ntinues"), vec!["continues"]);
    }

    #[test]
    fn test_output_is_lowercased() {
        assert_eq!(Tokenizer::new().tokenize("The THE the"), vec!["the"; 3]);
    }

    #[test]
    fn test_bare_consonants_filtered() {
        // "endX" splits as "end" + "x"; the stranded consonant is noise.
        assert_eq!(Tokenizer::new().tokenize("endX"), vec!["end"]);
        assert_eq!(Tokenizer::new().tokenize("t"), Vec::<String>::new());
    }

    #[test]
    fn test_lone_vowels_kept() {
        assert_eq!(Tokenizer::new().tokenize("a cat"), vec!["a", "cat"]);
    }

    #[test]
    fn test_punctuation_and_digits_stripped() {
        assert_eq!(
            Tokenizer::new().tokenize("One, two: 33 four."),
            vec!["one", "two", "four."]
        );
    }

    #[test]
    fn test_last_character_not_repaired() {
        // The scan never classifies the final character, so a trailing
        // period survives into the last token (see repair module docs).
        assert_eq!(Tokenizer::new().tokenize("dog."), vec!["dog."]);
    }

    #[test]
    fn test_idempotent_on_clean_tokens() {
        let tokenizer = Tokenizer::new();
        for token in ["cat", "something", "a", "frequency"] {
            assert_eq!(tokenizer.tokenize(token), vec![token]);
        }
    }
}
