//! Block-level segmenter.
//!
//! The block parser is line-oriented and handles:
//! - ATX headings (`#` to `######`)
//! - Paragraphs (consecutive text lines joined by single spaces)
//!
//! Blank lines only separate blocks; they produce nothing themselves.

mod event;
mod parser;

pub use event::{Block, BlockKind, MAX_HEADING_LEVEL};
pub use parser::BlockParser;

/// Split input into blocks in source order.
///
/// # Example
/// ```
/// use linkdown::{segment, Block};
///
/// let blocks = segment("# Title\nfirst\nsecond");
/// assert_eq!(blocks, [Block::heading(1, "Title"), Block::paragraph("first second")]);
/// ```
pub fn segment(input: &str) -> Vec<Block<'_>> {
    let mut blocks = Vec::with_capacity((input.len() / 64).max(4));
    BlockParser::new(input).parse(&mut blocks);
    blocks
}
