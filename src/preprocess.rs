//! Token preprocessing hook.
//!
//! A [`Preprocessor`] transforms a page's token sequence before counting.
//! The default is the identity; [`LemmaPreprocessor`] swaps in
//! lemmatization. The counting pipeline is injected with a preprocessor at
//! construction time and stays oblivious to which one is active.

use std::path::Path;

use crate::error::Result;
use crate::lemma::{DictionaryLemmatizer, Lemmatizer};

/// Transform applied to a page's token sequence before counting.
///
/// Implementations must preserve length and order: one output token per
/// input token.
pub trait Preprocessor {
    /// Transform `tokens`, preserving length and order.
    fn preprocess(&self, tokens: Vec<String>) -> Vec<String>;
}

/// The default preprocessor: tokens pass through untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityPreprocessor;

impl Preprocessor for IdentityPreprocessor {
    fn preprocess(&self, tokens: Vec<String>) -> Vec<String> {
        tokens
    }
}

/// Preprocessor that reduces tokens to their lemma forms.
///
/// Joins the tokens with single spaces, hands the joined string to the
/// wrapped [`Lemmatizer`], and returns the lemma sequence it produces.
pub struct LemmaPreprocessor {
    lemmatizer: Box<dyn Lemmatizer>,
}

impl LemmaPreprocessor {
    /// Wrap an already-constructed lemmatizer.
    pub fn new(lemmatizer: Box<dyn Lemmatizer>) -> Self {
        Self { lemmatizer }
    }

    /// Load the dictionary lemmatizer for `language` from `models_dir`.
    ///
    /// # Errors
    ///
    /// Fails with a configuration error if the language is unsupported or
    /// its model is not installed; see [`DictionaryLemmatizer::load`].
    pub fn for_language(language: &str, models_dir: &Path) -> Result<Self> {
        let lemmatizer = DictionaryLemmatizer::load(models_dir, language)?;
        Ok(Self::new(Box::new(lemmatizer)))
    }
}

impl Preprocessor for LemmaPreprocessor {
    fn preprocess(&self, tokens: Vec<String>) -> Vec<String> {
        if tokens.is_empty() {
            return tokens;
        }
        let joined = tokens.join(" ");
        let lemmas = self.lemmatizer.lemmatize(&joined);
        debug_assert_eq!(lemmas.len(), tokens.len());
        lemmas
    }
}
