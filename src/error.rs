//! Error types for the word-frequency library.
//!
//! This module defines all error types that can occur while extracting
//! word-frequency lists from a document. Every failure is fatal to the run:
//! there is no retry logic and no partial-result fallback.

/// Result type alias for word-frequency operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during frequency extraction.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Requested language has no lemma model support
    #[error("Unsupported language code: '{0}'")]
    UnsupportedLanguage(String),

    /// No lemma model installed for the requested language
    #[error(
        "No lemma model installed for '{language}': download a form-to-lemma \
         dictionary for this language and place it at {}",
        .path.display()
    )]
    MissingModel {
        /// Language code the model was requested for
        language: String,
        /// Path where the model file was expected
        path: std::path::PathBuf,
    },

    /// Lemma model file exists but could not be parsed
    #[error("Invalid lemma model at {}: {reason}", .path.display())]
    InvalidModel {
        /// Path of the rejected model file
        path: std::path::PathBuf,
        /// Reason the model was rejected
        reason: String,
    },

    /// Source document could not be opened or is unreadable
    #[error("Failed to read document: {0}")]
    Document(String),

    /// Text extraction failed for one page
    #[error("Failed to extract text from page {page}: {reason}")]
    Extraction {
        /// Zero-based page index
        page: usize,
        /// Reason extraction failed
        reason: String,
    },

    /// Page index outside the document
    #[error("Page index {index} out of range: document has {page_count} pages")]
    PageOutOfRange {
        /// Requested zero-based page index
        index: usize,
        /// Number of pages in the document
        page_count: usize,
    },

    /// Malformed section boundary specification
    #[error("Invalid section specification: {0}")]
    InvalidSections(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
