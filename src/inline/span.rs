//! Link span offsets.

use std::ops::{Range, RangeInclusive};

/// Offsets of a matched `[label](url)` inside a line.
///
/// All three offsets point at ASCII delimiters, so every derived slice lies
/// on a char boundary. The closing bracket always sits at `open_paren - 1`.
///
/// # Example
/// ```
/// use linkdown::LinkSpan;
///
/// let line = "see [docs](http://x)";
/// let span = LinkSpan::new(4, 10, 19);
/// assert_eq!(span.label(line), "docs");
/// assert_eq!(span.url(line), "http://x");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinkSpan {
    /// Position of the `[`.
    pub open_bracket: usize,
    /// Position of the `(` directly after the `]`.
    pub open_paren: usize,
    /// Position of the `)` that balances `open_paren`.
    pub close_paren: usize,
}

impl LinkSpan {
    /// Create a new span.
    #[inline]
    pub const fn new(open_bracket: usize, open_paren: usize, close_paren: usize) -> Self {
        debug_assert!(open_bracket < open_paren && open_paren < close_paren);
        Self {
            open_bracket,
            open_paren,
            close_paren,
        }
    }

    /// Position of the `]`.
    #[inline]
    pub const fn close_bracket(&self) -> usize {
        self.open_paren - 1
    }

    /// Bytes covered by the whole construct, delimiters included.
    #[inline]
    pub const fn full(&self) -> RangeInclusive<usize> {
        self.open_bracket..=self.close_paren
    }

    /// Range strictly between the brackets.
    #[inline]
    pub const fn label_range(&self) -> Range<usize> {
        self.open_bracket + 1..self.close_bracket()
    }

    /// Range strictly between the parentheses.
    #[inline]
    pub const fn url_range(&self) -> Range<usize> {
        self.open_paren + 1..self.close_paren
    }

    /// Label text within `line`.
    #[inline]
    pub fn label<'a>(&self, line: &'a str) -> &'a str {
        &line[self.label_range()]
    }

    /// URL text within `line`.
    #[inline]
    pub fn url<'a>(&self, line: &'a str) -> &'a str {
        &line[self.url_range()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranges() {
        let span = LinkSpan::new(0, 3, 5);
        assert_eq!(span.close_bracket(), 2);
        assert_eq!(span.full(), 0..=5);
        assert_eq!(span.label_range(), 1..2);
        assert_eq!(span.url_range(), 4..5);
    }

    #[test]
    fn test_empty_label_and_url() {
        let line = "[]()";
        let span = LinkSpan::new(0, 2, 3);
        assert_eq!(span.label(line), "");
        assert_eq!(span.url(line), "");
    }

    #[test]
    fn test_multibyte_label() {
        let line = "[héllo](u)";
        let span = LinkSpan::new(0, 8, 10);
        assert_eq!(span.label(line), "héllo");
        assert_eq!(span.url(line), "u");
    }
}
