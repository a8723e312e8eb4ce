//! Block types produced by the segmenter.

use std::borrow::Cow;

/// Highest heading level; a longer run of `#` is paragraph text.
pub const MAX_HEADING_LEVEL: u8 = 6;

/// Kind of a block, without its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// A header line.
    Heading {
        /// Heading level (1-6).
        level: u8,
    },
    /// One or more merged text lines.
    Paragraph,
}

/// A block-level unit of the input, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block<'a> {
    /// A header line.
    Heading {
        /// Heading level (1-6).
        level: u8,
        /// Text after the `#` run, leading whitespace removed.
        content: &'a str,
    },
    /// Consecutive non-blank, non-header lines joined by single spaces.
    ///
    /// Borrowed when the paragraph is a single line.
    Paragraph {
        /// Joined paragraph text.
        content: Cow<'a, str>,
    },
}

impl<'a> Block<'a> {
    /// Create a heading block.
    #[inline]
    pub fn heading(level: u8, content: &'a str) -> Self {
        debug_assert!((1..=MAX_HEADING_LEVEL).contains(&level));
        Self::Heading { level, content }
    }

    /// Create a paragraph block.
    #[inline]
    pub fn paragraph(content: impl Into<Cow<'a, str>>) -> Self {
        Self::Paragraph {
            content: content.into(),
        }
    }

    /// The block kind.
    #[inline]
    pub fn kind(&self) -> BlockKind {
        match self {
            Self::Heading { level, .. } => BlockKind::Heading { level: *level },
            Self::Paragraph { .. } => BlockKind::Paragraph,
        }
    }

    /// The block's text, without markers.
    #[inline]
    pub fn content(&self) -> &str {
        match self {
            Self::Heading { content, .. } => content,
            Self::Paragraph { content } => content,
        }
    }
}
