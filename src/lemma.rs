//! Lemmatization capability.
//!
//! Reducing words to their dictionary base forms ("running" → "run") is a
//! language-specific job delegated to an external model. The core only sees
//! the narrow [`Lemmatizer`] interface; [`DictionaryLemmatizer`] is the
//! bundled implementation, backed by a per-language JSON dictionary file in
//! a models directory. A missing model is a fatal configuration error
//! surfaced at load time, before any counting starts.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::{Error, Result};

/// Language codes with lemma model support.
pub const LANGUAGES: &[&str] = &[
    "zh", "da", "nl", "en", "de", "el", "it", "ja", "lt", "mk", "xx", // multi-language
    "nb", "pl", "pt", "ro", "ru", "es",
];

/// Reduces tokens to their dictionary base forms.
pub trait Lemmatizer {
    /// Lemmatize each whitespace-delimited token of `joined_text`.
    ///
    /// Returns one lemma per input token, in input order.
    fn lemmatize(&self, joined_text: &str) -> Vec<String>;
}

/// Lemmatizer backed by a per-language form-to-lemma dictionary.
///
/// The model is a JSON object mapping inflected forms to lemmas
/// (`{"running": "run", "ran": "run", ...}`), stored as
/// `<code>_lemmas.json` inside a models directory. Forms absent from the
/// dictionary pass through unchanged.
pub struct DictionaryLemmatizer {
    /// Language code the model was loaded for
    language: String,
    /// Inflected form → lemma
    lemmas: HashMap<String, String>,
}

impl std::fmt::Debug for DictionaryLemmatizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DictionaryLemmatizer")
            .field("language", &self.language)
            .field("lemmas", &self.lemmas.len())
            .finish()
    }
}

impl DictionaryLemmatizer {
    /// Model file name for a language code.
    pub fn model_file_name(language: &str) -> String {
        format!("{language}_lemmas.json")
    }

    /// Load the model for `language` from `models_dir`.
    ///
    /// # Errors
    ///
    /// - [`Error::UnsupportedLanguage`] if `language` is not in
    ///   [`LANGUAGES`];
    /// - [`Error::MissingModel`] if the model file does not exist (the
    ///   message tells the user where to install it);
    /// - [`Error::InvalidModel`] if the file is not a JSON string-to-string
    ///   object.
    pub fn load(models_dir: &Path, language: &str) -> Result<Self> {
        if !LANGUAGES.contains(&language) {
            return Err(Error::UnsupportedLanguage(language.to_string()));
        }

        let path = models_dir.join(Self::model_file_name(language));
        let file = File::open(&path).map_err(|_| Error::MissingModel {
            language: language.to_string(),
            path: path.clone(),
        })?;

        let lemmas: HashMap<String, String> = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| Error::InvalidModel {
                path: path.clone(),
                reason: e.to_string(),
            })?;

        log::info!(
            "Loaded {} lemmas for '{}' from {}",
            lemmas.len(),
            language,
            path.display()
        );

        Ok(Self {
            language: language.to_string(),
            lemmas,
        })
    }

    /// Language code this model was loaded for.
    pub fn language(&self) -> &str {
        &self.language
    }
}

impl Lemmatizer for DictionaryLemmatizer {
    fn lemmatize(&self, joined_text: &str) -> Vec<String> {
        joined_text
            .split_whitespace()
            .map(|token| {
                self.lemmas
                    .get(token)
                    .cloned()
                    .unwrap_or_else(|| token.to_string())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_model(dir: &Path, language: &str, body: &str) {
        let path = dir.join(DictionaryLemmatizer::model_file_name(language));
        let mut file = File::create(path).expect("create model file");
        file.write_all(body.as_bytes()).expect("write model file");
    }

    #[test]
    fn test_unsupported_language() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = DictionaryLemmatizer::load(dir.path(), "tlh").expect_err("load should fail");
        assert!(matches!(err, Error::UnsupportedLanguage(_)));
    }

    #[test]
    fn test_missing_model() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = DictionaryLemmatizer::load(dir.path(), "en").expect_err("load should fail");
        match err {
            Error::MissingModel { language, path } => {
                assert_eq!(language, "en");
                assert!(path.ends_with("en_lemmas.json"));
            },
            other => panic!("expected MissingModel, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_model() {
        let dir = tempfile::tempdir().expect("tempdir");
        write_model(dir.path(), "en", "not json at all");
        let err = DictionaryLemmatizer::load(dir.path(), "en").expect_err("load should fail");
        assert!(matches!(err, Error::InvalidModel { .. }));
    }

    #[test]
    fn test_lemmatize_known_and_unknown_forms() {
        let dir = tempfile::tempdir().expect("tempdir");
        write_model(dir.path(), "en", r#"{"running": "run", "cats": "cat"}"#);
        let lemmatizer = DictionaryLemmatizer::load(dir.path(), "en").expect("load model");

        assert_eq!(
            lemmatizer.lemmatize("cats running fast"),
            vec!["cat", "run", "fast"]
        );
    }

    #[test]
    fn test_lemmatize_preserves_length_and_order() {
        let dir = tempfile::tempdir().expect("tempdir");
        write_model(dir.path(), "it", r#"{"gatti": "gatto"}"#);
        let lemmatizer = DictionaryLemmatizer::load(dir.path(), "it").expect("load model");

        let out = lemmatizer.lemmatize("gatti e gatti");
        assert_eq!(out, vec!["gatto", "e", "gatto"]);
    }
}
