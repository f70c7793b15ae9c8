//! Text repair and tokenization.
//!
//! Raw PDF-extracted text arrives with the boundaries the eye relies on
//! missing or mangled: spaces dropped at line breaks, words split with
//! hyphens, page furniture (numbers, punctuation) mixed into the prose.
//! This module repairs those artifacts heuristically and splits the result
//! into cleaned word tokens.

pub mod repair;
pub mod tokenizer;

pub use tokenizer::Tokenizer;
