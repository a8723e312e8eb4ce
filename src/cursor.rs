//! Line cursor for splitting raw text on `\r?\n` boundaries.
//!
//! Uses memchr to jump between newlines instead of stepping byte by byte.

use memchr::memchr;

/// A cursor that yields the lines of an input, without their terminators.
///
/// A `\r` is only stripped when it directly precedes a `\n`. Text after the
/// final `\n` is yielded as the last line, even when it is empty.
///
/// # Example
/// ```
/// use linkdown::cursor::LineCursor;
///
/// let lines: Vec<&str> = LineCursor::new("one\r\ntwo\nthree").collect();
/// assert_eq!(lines, ["one", "two", "three"]);
/// ```
#[derive(Clone, Debug)]
pub struct LineCursor<'a> {
    input: &'a str,
    pos: usize,
    done: bool,
}

impl<'a> LineCursor<'a> {
    /// Create a new cursor over an input string.
    #[inline]
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            done: false,
        }
    }

    /// Bytes not yet consumed.
    #[inline]
    fn remaining_slice(&self) -> &'a [u8] {
        &self.input.as_bytes()[self.pos..]
    }

    /// Find the next newline relative to the current position.
    #[inline]
    fn find_newline(&self) -> Option<usize> {
        memchr(b'\n', self.remaining_slice())
    }
}

impl<'a> Iterator for LineCursor<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.done {
            return None;
        }

        let start = self.pos;
        // `\n` is ASCII, so both ends sit on char boundaries.
        let line = match self.find_newline() {
            Some(rel) => {
                self.pos = start + rel + 1;
                let line = &self.input[start..start + rel];
                line.strip_suffix('\r').unwrap_or(line)
            }
            None => {
                self.done = true;
                self.pos = self.input.len();
                &self.input[start..]
            }
        };
        Some(line)
    }
}
