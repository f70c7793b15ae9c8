//! Section boundary specifications and section-aware counting.
//!
//! A document can be divided into contiguous page-range sections and
//! counted section by section. By default a word is attributed only to the
//! first section it appears in; later sections drop it entirely (never a
//! residual count). Passing `show_duplicates = true` makes the sections
//! fully independent instead.

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::frequency::{FrequencyCounter, FrequencyTable};
use crate::source::PageTextSource;

/// How to partition the document's page range into sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionSpec {
    /// Fixed-size sections of the given number of pages each.
    PagesPerSection(usize),
    /// Explicit ascending page indices marking the start of each section;
    /// the final element bounds the last section (exclusive).
    Boundaries(Vec<usize>),
}

impl SectionSpec {
    /// Parse a specification from command-line values.
    ///
    /// A single integer is a pages-per-section size; two or more integers
    /// are explicit boundaries.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSections`] for an empty list or any value
    /// that is not a non-negative integer. Range validation (positive
    /// section size, non-decreasing boundaries) happens in
    /// [`validate`](Self::validate).
    pub fn parse(values: &[String]) -> Result<Self> {
        let numbers = values
            .iter()
            .map(|value| {
                value.parse::<usize>().map_err(|_| {
                    Error::InvalidSections(format!("'{value}' is not a non-negative integer"))
                })
            })
            .collect::<Result<Vec<usize>>>()?;

        match numbers.as_slice() {
            [] => Err(Error::InvalidSections(
                "expected a section size or a list of boundaries".to_string(),
            )),
            [pages_per_section] => Ok(Self::PagesPerSection(*pages_per_section)),
            _ => Ok(Self::Boundaries(numbers)),
        }
    }

    /// Check the specification is well-formed.
    ///
    /// Runs before any aggregation work: a malformed specification is
    /// reported without touching the document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSections`] for a zero section size, fewer
    /// than two explicit boundaries, or boundaries that decrease.
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::PagesPerSection(0) => Err(Error::InvalidSections(
                "pages per section must be at least 1".to_string(),
            )),
            Self::PagesPerSection(_) => Ok(()),
            Self::Boundaries(boundaries) => {
                if boundaries.len() < 2 {
                    return Err(Error::InvalidSections(
                        "need at least two boundaries to form a section".to_string(),
                    ));
                }
                if boundaries.windows(2).any(|pair| pair[0] > pair[1]) {
                    return Err(Error::InvalidSections(
                        "boundaries must be non-decreasing".to_string(),
                    ));
                }
                Ok(())
            },
        }
    }

    /// Resolve to a concrete ascending boundary sequence for a document of
    /// `page_count` pages.
    ///
    /// For [`PagesPerSection`](Self::PagesPerSection), boundaries walk
    /// `0, k, 2k, …` while below `page_count`, plus one trailing boundary
    /// so the final (possibly partial) section is covered; range counting
    /// clamps it back to the document. Explicit boundaries are used as
    /// given.
    ///
    /// # Errors
    ///
    /// Propagates [`validate`](Self::validate) failures.
    pub fn resolve(&self, page_count: usize) -> Result<Vec<usize>> {
        self.validate()?;

        match self {
            Self::PagesPerSection(pages_per_section) => {
                let mut boundaries = Vec::new();
                let mut boundary = 0;
                while boundary < page_count {
                    boundaries.push(boundary);
                    boundary += pages_per_section;
                }
                boundaries.push(boundary);
                Ok(boundaries)
            },
            Self::Boundaries(boundaries) => Ok(boundaries.clone()),
        }
    }
}

impl<S: PageTextSource> FrequencyCounter<S> {
    /// Count each section of the document, in section order.
    ///
    /// With `show_duplicates` false (the default policy), a token counts
    /// only in the first section it appears in: every token already seen in
    /// an earlier section is removed from later sections' tables outright —
    /// a repeated word never shows a partial count. The seen-set is fed the
    /// section's *original* tokens (before removal) and is owned by this
    /// invocation alone.
    ///
    /// With `show_duplicates` true, sections are counted independently and
    /// nothing is suppressed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSections`] before any counting if `spec` is
    /// malformed; propagates extraction failures.
    pub fn count_by_sections(
        &self,
        spec: &SectionSpec,
        show_duplicates: bool,
    ) -> Result<Vec<FrequencyTable>> {
        let boundaries = spec.resolve(self.page_count())?;
        log::info!(
            "Counting {} sections over {} pages (duplicates {})",
            boundaries.len().saturating_sub(1),
            self.page_count(),
            if show_duplicates { "shown" } else { "hidden" }
        );

        let mut seen: HashSet<String> = HashSet::new();
        let mut sections = Vec::with_capacity(boundaries.len().saturating_sub(1));

        for pair in boundaries.windows(2) {
            let mut table = self.count_range(pair[0], pair[1])?;

            if !show_duplicates {
                let discovered: Vec<String> = table.tokens().map(str::to_string).collect();
                table.retain(|token| !seen.contains(token));
                seen.extend(discovered);
            }

            sections.push(table);
        }

        Ok(sections)
    }
}
