//! Two-phase bracket/parenthesis scanner.
//!
//! A single left-to-right pass. Each link attempt first seeks a `](` with an
//! unmatched `[` before it, then seeks the `)` that balances the `(`. After a
//! completed or abandoned attempt the scanner re-arms and keeps looking.

use memchr::memchr2;
use smallvec::SmallVec;

use super::span::LinkSpan;

/// Phase of the current link attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanState {
    /// Collecting `[` positions, waiting for a `](`.
    #[default]
    SeekingBracket,
    /// Inside a candidate URL, waiting for the balancing `)`.
    SeekingParen {
        /// Position of the `(` that opened the URL.
        open_paren: usize,
    },
}

/// Reusable scanner state.
///
/// Stacks are cleared at the start of every scan; nothing carries over
/// between lines.
#[derive(Debug, Default)]
pub struct LinkScanner {
    state: ScanState,
    /// Unmatched `[` positions.
    brackets: SmallVec<[usize; 8]>,
    /// Open `(` positions of the current URL.
    parens: SmallVec<[usize; 4]>,
}

impl LinkScanner {
    /// Create a new scanner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    #[cfg(test)]
    fn state(&self) -> ScanState {
        self.state
    }

    /// Drop all per-attempt state and go back to seeking brackets.
    #[inline]
    fn rearm(&mut self) {
        self.state = ScanState::SeekingBracket;
        self.brackets.clear();
        self.parens.clear();
    }

    /// Scan `line` and append every complete link span, left to right.
    ///
    /// The bracket phase stops two bytes before the end of the line: a `](`
    /// needs a byte after it, so the final two bytes cannot open an attempt.
    /// The parenthesis phase runs to the end of the line.
    pub fn scan(&mut self, line: &str, spans: &mut Vec<LinkSpan>) {
        self.rearm();

        let bytes = line.as_bytes();
        let bracket_limit = bytes.len().saturating_sub(2);
        let mut pos = 0;

        loop {
            match self.state {
                ScanState::SeekingBracket => {
                    if pos >= bracket_limit {
                        break;
                    }
                    let Some(rel) = memchr2(b'[', b']', &bytes[pos..bracket_limit]) else {
                        break;
                    };
                    let i = pos + rel;
                    pos = i + 1;

                    if bytes[i] == b'[' {
                        self.brackets.push(i);
                    } else if bytes[i + 1] == b'(' && !self.brackets.is_empty() {
                        self.parens.push(i + 1);
                        self.state = ScanState::SeekingParen { open_paren: i + 1 };
                        pos = i + 2;
                    } else {
                        // `]` that closes no link
                        self.brackets.pop();
                    }
                }
                ScanState::SeekingParen { open_paren } => {
                    let Some(rel) = memchr2(b'(', b')', &bytes[pos..]) else {
                        break;
                    };
                    let i = pos + rel;
                    pos = i + 1;

                    if bytes[i] == b'(' {
                        self.parens.push(i);
                        continue;
                    }

                    self.parens.pop();
                    if self.parens.is_empty() {
                        if let Some(open_bracket) = self.brackets.pop() {
                            #[cfg(feature = "trace")]
                            tracing::trace!(open_bracket, open_paren, close_paren = i, "link span");
                            spans.push(LinkSpan::new(open_bracket, open_paren, i));
                        }
                        self.rearm();
                    }
                }
            }
        }
    }
}
