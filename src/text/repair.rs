//! Heuristic repair of raw PDF-extracted text.
//!
//! # Problem
//!
//! PDF text extraction frequently loses inter-word boundaries:
//!
//! - "some-" (line 1) + "thing" (line 2) → should become "something"
//! - "wordNext" → the space before the capital was dropped; should become
//!   "word Next"
//! - page numbers and punctuation are interleaved with the prose
//!
//! # Solution
//!
//! A single character-level scan over the line-collapsed text:
//!
//! 1. Digits are dropped outright. No space is inserted, so two words that
//!    were separated only by a numeral fuse together — an accepted
//!    limitation of the heuristic, not a bug.
//! 2. Punctuation becomes a single space.
//! 3. A hyphen directly before a letter is dropped, rejoining words split
//!    across a line break.
//! 4. A lowercase character directly before an uppercase character gets a
//!    space appended, re-inserting the boundary the extractor dropped.
//!
//! The scan window covers every character except the last: the final
//! character has no successor to compare against and is appended verbatim,
//! never classified. A trailing digit, hyphen, or punctuation mark at the
//! absolute end of a page therefore survives uncorrected.

/// Characters replaced by a single space during the repair scan.
///
/// Brackets, braces, quotes, angle brackets, sentence punctuation, the
/// usual ASCII symbols, plus the typographic marks that show up in print
/// PDFs (guillemets, curly quotes, the trademark sign).
const PUNCTUATION: &[char] = &[
    '!', '(', ')', '[', ']', '{', '}', ';', ':', '"', '\'', '\\', ',', '<', '>', '.', '/', '?',
    '@', '#', '$', '%', '^', '&', '*', '_', '~', '«', '»', '‘', '’', '“', '”', '™',
];

/// Single letters discarded as artifacts of the boundary repair.
///
/// Splitting "wordNext" style runs occasionally strands a lone consonant
/// that was never a word. Lone vowels ("a", "i", "o") are real words in
/// enough languages to keep.
const BARE_CONSONANTS: &[char] = &[
    'b', 'c', 'd', 'f', 'g', 'h', 'j', 'k', 'l', 'm', 'n', 'p', 'q', 'r', 's', 't', 'v', 'w', 'x',
    'z',
];

/// Check whether a word is a single bare consonant artifact.
///
/// Expects lowercased input; uppercase letters never match.
pub fn is_bare_consonant(word: &str) -> bool {
    let mut chars = word.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => BARE_CONSONANTS.contains(&c),
        _ => false,
    }
}

/// Run the character-level repair scan over line-collapsed text.
///
/// `dense_text` must already have its line breaks removed (concatenated
/// without inserting spaces); [`crate::text::Tokenizer`] does this before
/// calling in. Returns the repaired text with heuristic word boundaries
/// restored, ready for lowercasing and splitting.
pub fn repair_text(dense_text: &str) -> String {
    let chars: Vec<char> = dense_text.chars().collect();
    let mut cleaned = String::with_capacity(dense_text.len());

    if chars.is_empty() {
        return cleaned;
    }

    for i in 0..chars.len() - 1 {
        let current = chars[i];
        let next = chars[i + 1];

        if current.is_ascii_digit() {
            continue;
        } else if PUNCTUATION.contains(&current) {
            cleaned.push(' ');
        } else if current == '-' && next.is_alphabetic() {
            // Rejoin "some-" + "thing"; the hyphen contributes nothing.
            continue;
        } else if current.is_lowercase() && next.is_uppercase() {
            cleaned.push(current);
            cleaned.push(' ');
        } else {
            cleaned.push(current);
        }
    }

    // The final character sits outside the scan window: no successor to
    // inspect, so it is taken as-is.
    if let Some(&last) = chars.last() {
        cleaned.push(last);
    }

    cleaned
}
