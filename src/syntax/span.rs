// src/syntax/span.rs
//! Half-open byte spans over the original source text.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A half-open `[start, end)` byte range in the source a tree was built from.
///
/// Nodes synthesized by a fix carry [`TextSpan::SYNTHESIZED`]; only spans
/// taken from a parsed tree are meaningful for anchoring diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TextSpan {
    pub start: usize,
    pub len: usize,
}

impl TextSpan {
    /// Marker span for nodes that were never part of any source text.
    pub const SYNTHESIZED: TextSpan = TextSpan { start: 0, len: 0 };

    #[must_use]
    pub fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// Builds the span `[start, end)`. Inverted bounds clamp to an empty
    /// span at `start` instead of underflowing the length.
    #[must_use]
    pub fn from_bounds(start: usize, end: usize) -> Self {
        Self {
            start,
            len: end.saturating_sub(start),
        }
    }

    #[must_use]
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True if `other` lies entirely within `self` (inclusive bounds).
    #[must_use]
    pub fn contains(&self, other: TextSpan) -> bool {
        other.start >= self.start && other.end() <= self.end()
    }

    /// True if the two spans share at least one byte.
    #[must_use]
    pub fn overlaps(&self, other: TextSpan) -> bool {
        self.start < other.end() && other.start < self.end()
    }
}

impl fmt::Display for TextSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}..{})", self.start, self.end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_and_overlaps() {
        let outer = TextSpan::new(10, 20);
        let inner = TextSpan::new(12, 5);
        assert!(outer.contains(inner));
        assert!(!inner.contains(outer));
        assert!(outer.overlaps(inner));

        let disjoint = TextSpan::new(40, 5);
        assert!(!outer.overlaps(disjoint));

        // Touching spans do not overlap (half-open).
        let adjacent = TextSpan::new(30, 4);
        assert!(!outer.overlaps(adjacent));
    }

    #[test]
    fn inverted_bounds_clamp_to_empty() {
        let span = TextSpan::from_bounds(7, 3);
        assert_eq!(span, TextSpan::new(7, 0));
    }

    #[test]
    fn empty_span_contained_at_edge() {
        let outer = TextSpan::new(0, 10);
        assert!(outer.contains(TextSpan::new(10, 0)));
    }
}
