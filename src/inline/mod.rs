//! Inline link resolver.
//!
//! Two phases:
//! 1. Span collection: one left-to-right scan records every `[label](url)`
//! 2. Substitution: the line is never mutated, so every span offset stays
//!    valid; text between spans is copied once and each span is replaced by
//!    its anchor, in a single pass
//!
//! Labels are taken as-is. Only the URL part is parenthesis-balanced.

mod scanner;
mod span;

pub use scanner::{LinkScanner, ScanState};
pub use span::LinkSpan;

use crate::render::push_anchor;

/// Reusable link resolver.
///
/// Holds the scanner stacks and scratch buffers; all of them are cleared on
/// every call, so one resolver can serve any number of lines.
#[derive(Debug, Default)]
pub struct LinkResolver {
    scanner: LinkScanner,
    spans: Vec<LinkSpan>,
}

impl LinkResolver {
    /// Create a new resolver.
    pub fn new() -> Self {
        Self {
            scanner: LinkScanner::new(),
            spans: Vec::new(),
        }
    }

    /// Find every link span in `line`, in ascending order.
    pub fn find_spans(&mut self, line: &str) -> &[LinkSpan] {
        self.spans.clear();
        self.scanner.scan(line, &mut self.spans);
        &self.spans
    }

    /// Rewrite every link in `line` as an anchor.
    pub fn resolve(&mut self, line: &str) -> String {
        let mut out = String::with_capacity(line.len() + 16);
        self.resolve_into(line, &mut out);
        out
    }

    /// Append `line` to `out` with every link rewritten as an anchor.
    ///
    /// Linear in the length of `line`, however many links it holds.
    pub fn resolve_into(&mut self, line: &str, out: &mut String) {
        self.find_spans(line);
        debug_assert!(self.spans.windows(2).all(|w| w[0].close_paren < w[1].open_bracket));

        let mut copied = 0;
        for span in &self.spans {
            out.push_str(&line[copied..span.open_bracket]);
            push_anchor(out, span.url(line), span.label(line));
            copied = span.close_paren + 1;
        }
        out.push_str(&line[copied..]);
    }
}

/// Rewrite every `[label](url)` in `line` as `<a href="url">label</a>`.
///
/// Unmatched brackets or parentheses are left as literal text.
///
/// # Example
/// ```
/// use linkdown::resolve_links;
///
/// assert_eq!(
///     resolve_links("See [docs](http://x) and [more](http://y)"),
///     "See <a href=\"http://x\">docs</a> and <a href=\"http://y\">more</a>"
/// );
/// assert_eq!(resolve_links("[not a link"), "[not a link");
/// ```
pub fn resolve_links(line: &str) -> String {
    LinkResolver::new().resolve(line)
}
