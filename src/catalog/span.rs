//! Source line spans.
//!
//! Entries and diagnostics are addressed by whole lines, so a span is just
//! an inclusive range of 1-indexed line numbers.

use std::cmp::Ordering;
use std::fmt;

/// An inclusive range of 1-indexed lines in the catalog source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineSpan {
    /// First line (1-indexed).
    pub start: usize,
    /// Last line (1-indexed, inclusive).
    pub end: usize,
}

impl LineSpan {
    /// Create a span covering a single line.
    pub fn line(line: usize) -> Self {
        Self {
            start: line,
            end: line,
        }
    }

    /// Create a span covering `start..=end`.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Whether the span covers exactly one line.
    pub fn is_single_line(&self) -> bool {
        self.start == self.end
    }

    /// Extend the span so that it ends at `line`.
    pub fn extend_to(&mut self, line: usize) {
        self.end = line;
    }
}

impl Ord for LineSpan {
    fn cmp(&self, other: &Self) -> Ordering {
        self.start
            .cmp(&other.start)
            .then_with(|| self.end.cmp(&other.end))
    }
}

impl PartialOrd for LineSpan {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Renders as `Line N` or `Lines N-M`.
impl fmt::Display for LineSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single_line() {
            write!(f, "Line {}", self.start)
        } else {
            write!(f, "Lines {}-{}", self.start, self.end)
        }
    }
}
