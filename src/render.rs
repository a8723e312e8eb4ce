//! HTML output writer.
//!
//! Content is written verbatim. Nothing here escapes HTML; callers that
//! render untrusted input must sanitize it upstream.

use crate::block::{Block, MAX_HEADING_LEVEL};

/// HTML output writer with a reusable buffer.
///
/// # Example
/// ```
/// use linkdown::HtmlWriter;
///
/// let mut writer = HtmlWriter::with_capacity_for(16);
/// writer.paragraph_start();
/// writer.write_str("see ");
/// writer.write_anchor("http://x", "docs");
/// writer.paragraph_end();
///
/// assert_eq!(writer.into_string(), "<p>see <a href=\"http://x\">docs</a></p>");
/// ```
#[derive(Debug, Default)]
pub struct HtmlWriter {
    out: String,
}

impl HtmlWriter {
    /// Create a new writer with default capacity.
    #[inline]
    pub fn new() -> Self {
        Self {
            out: String::with_capacity(1024),
        }
    }

    /// Create with pre-allocated capacity based on expected input size.
    ///
    /// Tags and anchors add roughly a quarter on top of the input.
    #[inline]
    pub fn with_capacity_for(input_len: usize) -> Self {
        Self::with_capacity(input_len + input_len / 4)
    }

    /// Create with explicit capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            out: String::with_capacity(capacity),
        }
    }

    /// Write a string verbatim.
    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.out.push_str(s);
    }

    /// Write a single char.
    #[inline]
    pub fn write_char(&mut self, c: char) {
        self.out.push(c);
    }

    /// Current output length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.out.len()
    }

    /// Check if output is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    /// Clear output for reuse (keeps capacity).
    #[inline]
    pub fn clear(&mut self) {
        self.out.clear();
    }

    /// Get output as str.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.out
    }

    /// Take ownership of the output.
    #[inline]
    pub fn into_string(self) -> String {
        self.out
    }

    /// Get mutable reference to internal buffer.
    #[inline]
    pub fn buffer_mut(&mut self) -> &mut String {
        &mut self.out
    }

    // --- Block elements ---

    /// Write paragraph start: `<p>`
    #[inline]
    pub fn paragraph_start(&mut self) {
        self.write_str("<p>");
    }

    /// Write paragraph end: `</p>`
    #[inline]
    pub fn paragraph_end(&mut self) {
        self.write_str("</p>");
    }

    /// Write heading start: `<hN>`
    #[inline]
    pub fn heading_start(&mut self, level: u8) {
        debug_assert!((1..=MAX_HEADING_LEVEL).contains(&level));
        self.write_str("<h");
        self.write_char(char::from(b'0' + level));
        self.write_char('>');
    }

    /// Write heading end: `</hN>`
    #[inline]
    pub fn heading_end(&mut self, level: u8) {
        debug_assert!((1..=MAX_HEADING_LEVEL).contains(&level));
        self.write_str("</h");
        self.write_char(char::from(b'0' + level));
        self.write_char('>');
    }

    /// Wrap a block in its tag.
    pub fn write_block(&mut self, block: &Block<'_>) {
        match block {
            Block::Heading { level, content } => {
                self.heading_start(*level);
                self.write_str(content);
                self.heading_end(*level);
            }
            Block::Paragraph { content } => {
                self.paragraph_start();
                self.write_str(content);
                self.paragraph_end();
            }
        }
    }

    // --- Inline elements ---

    /// Write `<a href="url">label</a>`.
    #[inline]
    pub fn write_anchor(&mut self, url: &str, label: &str) {
        push_anchor(&mut self.out, url, label);
    }
}

/// Append `<a href="url">label</a>` to `out`.
#[inline]
pub fn push_anchor(out: &mut String, url: &str, label: &str) {
    out.push_str("<a href=\"");
    out.push_str(url);
    out.push_str("\">");
    out.push_str(label);
    out.push_str("</a>");
}

/// Wrap a single block, returning the fragment.
///
/// # Example
/// ```
/// use linkdown::{render::wrap, Block};
///
/// assert_eq!(wrap(&Block::heading(2, "Intro")), "<h2>Intro</h2>");
/// assert_eq!(wrap(&Block::paragraph("text")), "<p>text</p>");
/// ```
pub fn wrap(block: &Block<'_>) -> String {
    let mut writer = HtmlWriter::with_capacity(block.content().len() + 9);
    writer.write_block(block);
    writer.into_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_heading_levels() {
        for level in 1..=MAX_HEADING_LEVEL {
            let html = wrap(&Block::heading(level, "x"));
            assert_eq!(html, format!("<h{level}>x</h{level}>"));
        }
    }

    #[test]
    fn test_empty_heading() {
        assert_eq!(wrap(&Block::heading(1, "")), "<h1></h1>");
    }

    #[test]
    fn test_no_escaping() {
        assert_eq!(
            wrap(&Block::paragraph("a < b & <b>c</b>")),
            "<p>a < b & <b>c</b></p>"
        );
    }

    #[test]
    fn test_anchor() {
        let mut writer = HtmlWriter::new();
        writer.write_anchor("u", "l");
        assert_eq!(writer.as_str(), "<a href=\"u\">l</a>");
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let mut writer = HtmlWriter::with_capacity(64);
        writer.write_str("abc");
        assert_eq!(writer.len(), 3);
        writer.clear();
        assert!(writer.is_empty());
        assert!(writer.buffer_mut().capacity() >= 64);
    }
}
