//! # Zipf Oxide
//!
//! Extract word-frequency ("Zipf") lists from PDF documents.
//!
//! Built for linguists and writers analyzing vocabulary distribution: a
//! document is read page by page, its raw extracted text is repaired
//! (PDF extraction habitually drops spaces at case transitions and splits
//! words with hyphens), tokenized, optionally reduced to lemma forms, and
//! counted — whole-document or divided into page-range sections with a
//! policy for words repeated across sections.
//!
//! ## Core Features
//!
//! - **Text repair**: heuristic re-insertion of the boundaries PDF
//!   extraction drops (case-transition spaces, hyphenated line breaks),
//!   digit and punctuation stripping, bare-consonant artifact removal
//! - **Section-aware counting**: fixed-size or explicit page-range
//!   sections; by default a word counts only in the first section it
//!   appears in, or count every section independently
//! - **Lemmatization**: optional per-language dictionary models reduce
//!   words to their base forms before counting
//! - **Pluggable sources**: counting runs against a narrow page-text
//!   interface, so any extractor (or in-memory text) can feed it
//!
//! ## Quick Start
//!
//! ```no_run
//! use zipf_oxide::{FrequencyCounter, PdfPageSource, SectionSpec};
//!
//! # fn main() -> zipf_oxide::Result<()> {
//! let source = PdfPageSource::open("book.pdf")?;
//! let counter = FrequencyCounter::new(source);
//!
//! // Whole-document frequency list.
//! let table = counter.count_document()?;
//! for (token, count) in table.by_descending_count().iter().take(10) {
//!     println!("{token} {count}");
//! }
//!
//! // Ten-page sections; repeated words count only in their first section.
//! let sections = counter.count_by_sections(&SectionSpec::PagesPerSection(10), false)?;
//! println!("{} sections", sections.len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

// Error handling
pub mod error;

// Page text sources
pub mod pdf;
pub mod source;

// Text repair and tokenization
pub mod text;

// Preprocessing and lemmatization
pub mod lemma;
pub mod preprocess;

// Frequency aggregation
pub mod frequency;
pub mod sections;

// Presentation
pub mod format;

// Re-exports
pub use error::{Error, Result};
pub use frequency::{FrequencyCounter, FrequencyTable};
pub use lemma::{DictionaryLemmatizer, Lemmatizer, LANGUAGES};
pub use pdf::PdfPageSource;
pub use preprocess::{IdentityPreprocessor, LemmaPreprocessor, Preprocessor};
pub use sections::SectionSpec;
pub use source::{InMemoryPageSource, PageTextSource};
pub use text::Tokenizer;

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        // VERSION is populated from CARGO_PKG_VERSION at compile time
        assert!(VERSION.starts_with("0."));
    }

    #[test]
    fn test_name() {
        assert_eq!(NAME, "zipf_oxide");
    }
}
