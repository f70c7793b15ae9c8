//! Page text source capability.
//!
//! The frequency pipeline never parses documents itself; it reads raw
//! per-page text through the narrow [`PageTextSource`] interface. The
//! production implementation is [`crate::pdf::PdfPageSource`];
//! [`InMemoryPageSource`] backs tests and synthetic documents.

use crate::error::{Error, Result};

/// A read-only supplier of raw per-page text.
///
/// Pages are addressed by zero-based index in `[0, page_count)`. Reading a
/// page outside that range is an error; implementations must not silently
/// clamp or return empty text for out-of-range indices.
pub trait PageTextSource {
    /// Number of pages in the document.
    fn page_count(&self) -> usize;

    /// Raw extracted text of the page at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PageOutOfRange`] if `index >= page_count()`, or a
    /// document error if the underlying source cannot produce the text.
    fn page_text(&self, index: usize) -> Result<String>;
}

/// Page source over an owned list of page strings.
///
/// Useful for tests and for callers that already hold extracted text.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPageSource {
    pages: Vec<String>,
}

impl InMemoryPageSource {
    /// Create a source from owned page strings.
    pub fn new(pages: Vec<String>) -> Self {
        Self { pages }
    }

    /// Create a source from anything yielding string-like pages.
    pub fn from_pages<I, S>(pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(pages.into_iter().map(Into::into).collect())
    }
}

impl PageTextSource for InMemoryPageSource {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_text(&self, index: usize) -> Result<String> {
        self.pages
            .get(index)
            .cloned()
            .ok_or(Error::PageOutOfRange {
                index,
                page_count: self.pages.len(),
            })
    }
}
