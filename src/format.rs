//! Plain-text formatting of frequency tables.
//!
//! One token per line, most frequent first. Counts are hidden by default
//! and shown next to each entry (`"the 182"`) on request.

use crate::frequency::FrequencyTable;

/// Format one table, most frequent token first.
///
/// Ties keep discovery order. With `show_counts`, each line is
/// `"<token> <count>"`; otherwise the bare token.
pub fn format_table(table: &FrequencyTable, show_counts: bool) -> String {
    let mut output = String::new();
    for (token, count) in table.by_descending_count() {
        if show_counts {
            output.push_str(&format!("{token} {count}\n"));
        } else {
            output.push_str(token);
            output.push('\n');
        }
    }
    output
}

/// Format a run of section tables with numbered headings.
///
/// Sections are numbered from 1 in section order; blocks are separated by
/// a blank line. An empty section (every word suppressed as a duplicate)
/// still gets its heading, so section numbering stays aligned with the
/// page ranges.
pub fn format_sections(sections: &[FrequencyTable], show_counts: bool) -> String {
    let mut output = String::new();
    for (index, table) in sections.iter().enumerate() {
        if index > 0 {
            output.push('\n');
        }
        output.push_str(&format!("Section {}\n", index + 1));
        output.push_str(&format_table(table, show_counts));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(&str, usize)]) -> FrequencyTable {
        entries
            .iter()
            .map(|(token, count)| (token.to_string(), *count))
            .collect()
    }

    #[test]
    fn test_format_table_hides_counts_by_default_policy() {
        let out = format_table(&table(&[("the", 3), ("cat", 1)]), false);
        assert_eq!(out, "the\ncat\n");
    }

    #[test]
    fn test_format_table_shows_counts() {
        let out = format_table(&table(&[("the", 3), ("cat", 1)]), true);
        assert_eq!(out, "the 3\ncat 1\n");
    }

    #[test]
    fn test_format_table_sorts_descending() {
        let out = format_table(&table(&[("cat", 1), ("the", 3)]), true);
        assert_eq!(out, "the 3\ncat 1\n");
    }

    #[test]
    fn test_format_empty_table() {
        assert_eq!(format_table(&FrequencyTable::new(), true), "");
    }

    #[test]
    fn test_format_sections_numbers_from_one() {
        let sections = vec![table(&[("cat", 2)]), FrequencyTable::new(), table(&[("dog", 1)])];
        let out = format_sections(&sections, true);
        assert_eq!(out, "Section 1\ncat 2\n\nSection 2\n\nSection 3\ndog 1\n");
    }
}
