//! Byte-range spans used by error reporting.

use serde::{Deserialize, Serialize};

/// A half-open byte range into the parsed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Covers the single character `c` starting at byte offset `at`.
    pub(crate) fn of_char(c: char, at: usize) -> Self {
        Self::new(at, at + c.len_utf8())
    }
}

impl From<std::ops::Range<usize>> for Span {
    fn from(range: std::ops::Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end,
        }
    }
}
