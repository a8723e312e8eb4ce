//! linkdown: Markdown subset to HTML converter
//!
//! Converts headers and paragraphs, and rewrites inline `[label](url)` links
//! with a bracket/parenthesis matcher that handles adjacent links and
//! parentheses inside URLs, which a single greedy regex cannot.
//!
//! # Supported syntax
//! - ATX headers: 1 to 6 `#` at the start of a (trimmed) line
//! - Paragraphs: consecutive non-blank lines, joined by single spaces
//! - Inline links: `[label](url)`, URL parentheses balanced
//!
//! Everything else passes through as paragraph text. Content is not
//! HTML-escaped.

pub mod block;
pub mod cursor;
pub mod inline;
pub mod render;

// Re-export primary types
pub use block::{segment, Block, BlockKind, BlockParser};
pub use inline::{resolve_links, LinkResolver, LinkSpan};
pub use render::HtmlWriter;

/// Conversion options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Rewrite `[label](url)` as anchors.
    pub links: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self { links: true }
    }
}

/// Convert Markdown to an HTML fragment.
///
/// This is the primary API for simple use cases.
///
/// # Example
/// ```
/// let html = linkdown::convert("# Hello\n\nSee [docs](http://x)");
/// assert_eq!(html, "<h1>Hello</h1><p>See <a href=\"http://x\">docs</a></p>");
/// ```
pub fn convert(input: &str) -> String {
    convert_with_options(input, &Options::default())
}

/// Convert Markdown to HTML with options.
pub fn convert_with_options(input: &str, options: &Options) -> String {
    let mut writer = HtmlWriter::with_capacity_for(input.len());
    render_to_writer(input, &mut writer, options);
    writer.into_string()
}

/// Convert Markdown to HTML, writing into a provided buffer.
///
/// The buffer is cleared first; its capacity is reused.
pub fn convert_into(input: &str, out: &mut String) {
    convert_into_with_options(input, out, &Options::default());
}

/// Convert Markdown to HTML into a provided buffer with options.
pub fn convert_into_with_options(input: &str, out: &mut String, options: &Options) {
    out.clear();
    out.reserve(input.len() + input.len() / 4);
    let mut writer = HtmlWriter::with_capacity(0);
    // Use the provided buffer directly
    std::mem::swap(writer.buffer_mut(), out);
    render_to_writer(input, &mut writer, options);
    std::mem::swap(writer.buffer_mut(), out);
}

/// Render Markdown to an HtmlWriter.
///
/// Each block is wrapped first, then the link pass runs over the wrapped
/// fragment. Blocks never see each other's output.
fn render_to_writer(input: &str, writer: &mut HtmlWriter, options: &Options) {
    let blocks = segment(input);

    if !options.links {
        for block in &blocks {
            writer.write_block(block);
        }
        return;
    }

    let mut resolver = LinkResolver::new();
    let mut fragment = HtmlWriter::with_capacity(256);
    for block in &blocks {
        fragment.clear();
        fragment.write_block(block);
        resolver.resolve_into(fragment.as_str(), writer.buffer_mut());
    }
}
