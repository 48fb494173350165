//! Byte spans into original SQL text.

use serde::{Deserialize, Serialize};

/// An inclusive `[start, stop]` byte range into the original SQL text.
///
/// Spans address the text the client sent; they are produced by the parser
/// and consumed by the rewrite engine, which never mutates the original.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub stop: usize,
}

impl Span {
    pub fn new(start: usize, stop: usize) -> Self {
        debug_assert!(start <= stop, "span start {} exceeds stop {}", start, stop);
        Self { start, stop }
    }

    /// True when `self` and `other` share at least one byte.
    pub fn overlaps(&self, other: &Span) -> bool {
        self.start <= other.stop && other.start <= self.stop
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_detection() {
        let a = Span::new(5, 10);
        assert!(a.overlaps(&Span::new(10, 12)));
        assert!(a.overlaps(&Span::new(0, 5)));
        assert!(!a.overlaps(&Span::new(11, 20)));
        assert!(!a.overlaps(&Span::new(0, 4)));
    }
}
