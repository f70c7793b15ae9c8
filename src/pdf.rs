//! PDF-backed page text source.
//!
//! Thin adapter over the `lopdf` crate: the document is loaded once, its
//! page numbers are indexed, and each [`PageTextSource::page_text`] call
//! extracts one page's raw text. All failures are fatal; a page that cannot
//! be extracted aborts the whole run rather than producing partial results.

use std::path::Path;

use lopdf::Document;

use crate::error::{Error, Result};
use crate::source::PageTextSource;

/// Page text source reading from a PDF file via `lopdf`.
pub struct PdfPageSource {
    /// Parsed PDF document
    document: Document,
    /// Page numbers in document order (lopdf numbers pages from 1)
    page_numbers: Vec<u32>,
}

impl std::fmt::Debug for PdfPageSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PdfPageSource")
            .field("page_count", &self.page_numbers.len())
            .finish_non_exhaustive()
    }
}

impl PdfPageSource {
    /// Open a PDF document from a file path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Document`] if the file cannot be loaded as a PDF or
    /// is encrypted.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let document = Document::load(path)
            .map_err(|e| Error::Document(format!("{}: {}", path.display(), e)))?;

        if document.is_encrypted() {
            return Err(Error::Document(format!(
                "{}: encrypted documents are not supported",
                path.display()
            )));
        }

        let page_numbers: Vec<u32> = document.get_pages().into_keys().collect();
        log::info!(
            "Opened {} ({} pages)",
            path.display(),
            page_numbers.len()
        );

        Ok(Self {
            document,
            page_numbers,
        })
    }
}

impl PageTextSource for PdfPageSource {
    fn page_count(&self) -> usize {
        self.page_numbers.len()
    }

    fn page_text(&self, index: usize) -> Result<String> {
        let page_number = *self
            .page_numbers
            .get(index)
            .ok_or(Error::PageOutOfRange {
                index,
                page_count: self.page_numbers.len(),
            })?;

        self.document
            .extract_text(&[page_number])
            .map_err(|e| Error::Extraction {
                page: index,
                reason: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_missing_file() {
        let err = PdfPageSource::open("no/such/file.pdf").expect_err("open should fail");
        assert!(matches!(err, Error::Document(_)));
        assert!(format!("{}", err).contains("no/such/file.pdf"));
    }

    #[test]
    fn test_open_non_pdf_bytes() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("not_a.pdf");
        std::fs::write(&path, b"plain text, not a pdf").expect("write");
        let err = PdfPageSource::open(&path).expect_err("open should fail");
        assert!(matches!(err, Error::Document(_)));
    }
}
