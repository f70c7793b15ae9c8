//! Frequency tables and page-range aggregation.

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::Result;
use crate::preprocess::{IdentityPreprocessor, Preprocessor};
use crate::source::PageTextSource;
use crate::text::Tokenizer;

/// Mapping from token to occurrence count over one page range.
///
/// Keys are unique and iteration follows discovery order (the order tokens
/// were first counted), which is also the tie-break used when sorting by
/// count. Zero-count entries never exist: suppression removes a token
/// entirely instead of leaving a zero behind.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FrequencyTable {
    counts: IndexMap<String, usize>,
}

impl FrequencyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `token`.
    pub fn increment(&mut self, token: String) {
        self.counts.entry(token).and_modify(|c| *c += 1).or_insert(1);
    }

    /// Occurrence count of `token` (0 if absent).
    pub fn count(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Whether `token` has been counted.
    pub fn contains(&self, token: &str) -> bool {
        self.counts.contains_key(token)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether the table holds no tokens.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total occurrence count across all tokens.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Iterate `(token, count)` pairs in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(token, count)| (token.as_str(), *count))
    }

    /// Iterate tokens in discovery order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }

    /// Keep only the tokens for which `keep` returns true.
    ///
    /// Preserves discovery order of the survivors.
    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.counts.retain(|token, _| keep(token));
    }

    /// Add all of `other`'s counts into this table.
    pub fn merge(&mut self, other: &FrequencyTable) {
        for (token, count) in other.iter() {
            *self.counts.entry(token.to_string()).or_insert(0) += count;
        }
    }

    /// Entries sorted by count descending; ties keep discovery order.
    pub fn by_descending_count(&self) -> Vec<(&str, usize)> {
        let mut entries: Vec<_> = self.iter().collect();
        // Stable sort, so equal counts stay in discovery order.
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }
}

impl FromIterator<(String, usize)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (String, usize)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().collect(),
        }
    }
}

/// Counts token occurrences over page ranges of a document.
///
/// Owns the page text source, the tokenizer, and the injected
/// [`Preprocessor`] (identity by default, lemmatizing when requested).
/// Section-aware counting with duplicate handling lives in
/// [`count_by_sections`](FrequencyCounter::count_by_sections).
///
/// # Example
///
/// ```
/// use zipf_oxide::{FrequencyCounter, InMemoryPageSource};
///
/// let source = InMemoryPageSource::from_pages(["cat cat dog", "dog bird"]);
/// let counter = FrequencyCounter::new(source);
///
/// let table = counter.count_document()?;
/// assert_eq!(table.count("cat"), 2);
/// assert_eq!(table.count("dog"), 2);
/// # Ok::<(), zipf_oxide::Error>(())
/// ```
pub struct FrequencyCounter<S> {
    source: S,
    tokenizer: Tokenizer,
    preprocessor: Box<dyn Preprocessor>,
}

impl<S: PageTextSource> FrequencyCounter<S> {
    /// Create a counter with the identity preprocessor.
    pub fn new(source: S) -> Self {
        Self::with_preprocessor(source, Box::new(IdentityPreprocessor))
    }

    /// Create a counter with an injected preprocessor.
    pub fn with_preprocessor(source: S, preprocessor: Box<dyn Preprocessor>) -> Self {
        Self {
            source,
            tokenizer: Tokenizer::new(),
            preprocessor,
        }
    }

    /// The underlying page text source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.source.page_count()
    }

    /// Cleaned, preprocessed token sequence for the page at `index`.
    ///
    /// # Errors
    ///
    /// Propagates source failures, including out-of-range indices.
    pub fn page_tokens(&self, index: usize) -> Result<Vec<String>> {
        let raw_text = self.source.page_text(index)?;
        let tokens = self.tokenizer.tokenize(&raw_text);
        log::debug!("Page {}: {} tokens", index, tokens.len());
        Ok(self.preprocessor.preprocess(tokens))
    }

    /// Frequency table for the single page at `index`.
    ///
    /// # Errors
    ///
    /// Unlike [`count_range`](Self::count_range), an out-of-range index is
    /// an error here: the caller named a specific page.
    pub fn count_page(&self, index: usize) -> Result<FrequencyTable> {
        let mut table = FrequencyTable::new();
        for token in self.page_tokens(index)? {
            table.increment(token);
        }
        Ok(table)
    }

    /// Frequency table over pages `initial_page .. final_page`.
    ///
    /// The end of the range is clamped to the page count, and a range that
    /// starts at or beyond the clamped end yields an empty table — not an
    /// error. Counts are exact occurrence counts within the scanned pages.
    ///
    /// # Errors
    ///
    /// Propagates extraction failures; one unreadable page aborts the run.
    pub fn count_range(&self, initial_page: usize, final_page: usize) -> Result<FrequencyTable> {
        let mut table = FrequencyTable::new();
        let end = final_page.min(self.source.page_count());

        for page in initial_page..end {
            for token in self.page_tokens(page)? {
                table.increment(token);
            }
        }

        log::debug!(
            "Pages {}..{}: {} distinct tokens, {} occurrences",
            initial_page,
            end,
            table.len(),
            table.total()
        );
        Ok(table)
    }

    /// Frequency table over the whole document.
    pub fn count_document(&self) -> Result<FrequencyTable> {
        self.count_range(0, self.source.page_count())
    }
}
