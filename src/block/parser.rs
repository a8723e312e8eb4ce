//! Block parser implementation.

use std::borrow::Cow;

use crate::cursor::LineCursor;

use super::event::{Block, MAX_HEADING_LEVEL};

/// Paragraph text collected across lines.
///
/// Holds a borrowed slice until a second line arrives, then switches to an
/// owned buffer joined with single spaces.
#[derive(Debug, Default)]
struct ParagraphState<'a> {
    content: Option<Cow<'a, str>>,
}

impl<'a> ParagraphState<'a> {
    fn add_line(&mut self, line: &'a str) {
        match &mut self.content {
            None => self.content = Some(Cow::Borrowed(line)),
            Some(content) => {
                let content = content.to_mut();
                content.push(' ');
                content.push_str(line);
            }
        }
    }

    fn finish(&mut self) -> Option<Cow<'a, str>> {
        self.content.take()
    }
}

/// Block parser state.
pub struct BlockParser<'a> {
    /// Line cursor over the input.
    cursor: LineCursor<'a>,
    /// Paragraph in progress.
    paragraph: ParagraphState<'a>,
}

impl<'a> BlockParser<'a> {
    /// Create a new block parser.
    pub fn new(input: &'a str) -> Self {
        Self {
            cursor: LineCursor::new(input),
            paragraph: ParagraphState::default(),
        }
    }

    /// Parse all blocks and collect them in source order.
    pub fn parse(&mut self, blocks: &mut Vec<Block<'a>>) {
        while let Some(line) = self.cursor.next() {
            self.parse_line(line, blocks);
        }

        // Close any open paragraph at end of input
        self.close_paragraph(blocks);
    }

    /// Parse a single line.
    fn parse_line(&mut self, line: &'a str, blocks: &mut Vec<Block<'a>>) {
        let line = line.trim_start();

        if line.is_empty() {
            self.close_paragraph(blocks);
            return;
        }

        if let Some((level, content)) = atx_heading(line) {
            self.close_paragraph(blocks);
            #[cfg(feature = "trace")]
            tracing::trace!(level, "heading block");
            blocks.push(Block::heading(level, content));
            return;
        }

        self.paragraph.add_line(line);
    }

    /// Emit the pending paragraph, if any.
    fn close_paragraph(&mut self, blocks: &mut Vec<Block<'a>>) {
        if let Some(content) = self.paragraph.finish() {
            #[cfg(feature = "trace")]
            tracing::trace!(len = content.len(), "paragraph block");
            blocks.push(Block::paragraph(content));
        }
    }
}

/// Classify a trimmed line as a heading.
///
/// Returns the level and the content after the `#` run. A run longer than
/// [`MAX_HEADING_LEVEL`] is not a heading at all.
fn atx_heading(line: &str) -> Option<(u8, &str)> {
    let level = line.bytes().take_while(|&b| b == b'#').count();
    if level == 0 || level > MAX_HEADING_LEVEL as usize {
        return None;
    }
    Some((level as u8, line[level..].trim_start()))
}
