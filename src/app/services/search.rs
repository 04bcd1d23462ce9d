//! Literal, case-sensitive text search.
//!
//! Match ranges are character offsets. Highlight-all always scans from the
//! start of the document; only [`find_next`] starts from a cursor.

use std::ops::Range;

use crate::app::domain::document::Document;

/// Result of a user-facing search. A miss is a normal outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Found { count: usize },
    Next { range: Range<usize>, wrapped: bool },
    NotFound,
}

/// Lazy iterator over non-overlapping matches, left to right.
#[derive(Debug, Clone)]
pub struct Matches<'a> {
    text: &'a str,
    query: &'a str,
    query_chars: usize,
    byte_pos: usize,
    char_pos: usize,
}

impl Iterator for Matches<'_> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.query.is_empty() || self.byte_pos > self.text.len() {
            return None;
        }
        let rest = &self.text[self.byte_pos..];
        let rel = rest.find(self.query)?;

        let start = self.char_pos + rest[..rel].chars().count();
        let end = start + self.query_chars;
        self.byte_pos += rel + self.query.len();
        self.char_pos = end;
        Some(start..end)
    }
}

/// All matches of `query` in `text`. Calling again re-scans from the start.
/// An empty query yields nothing.
pub fn find_all<'a>(text: &'a str, query: &'a str) -> Matches<'a> {
    Matches {
        text,
        query,
        query_chars: query.chars().count(),
        byte_pos: 0,
        char_pos: 0,
    }
}

/// First match starting at or after `from`, wrapping to the start once.
/// The flag is true when the match was found by wrapping.
pub fn find_next(text: &str, query: &str, from: usize) -> Option<(Range<usize>, bool)> {
    let mut first = None;
    for range in find_all(text, query) {
        if range.start >= from {
            return Some((range, false));
        }
        first.get_or_insert(range);
    }
    first.map(|range| (range, true))
}

/// Replace the document's highlight set with every match of `query`.
/// Text and style attributes are untouched; re-running with the same query
/// produces the same set. Returns the number of matches.
pub fn highlight_all(doc: &mut Document, query: &str) -> usize {
    let ranges: Vec<_> = find_all(doc.text(), query).collect();
    let count = ranges.len();
    doc.set_highlights(ranges);
    count
}
