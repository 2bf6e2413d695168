//! # Line Splitter
//!
//! Lazy line enumeration over an in-memory string.
//!
//! - A line break is `\n`, `\r\n`, or a lone `\r`; the break is stripped
//! - The last line is yielded even without a trailing break
//! - A trailing break does not produce an extra empty line
//! - Empty input yields no lines at all
//!
//! Lines are borrowed slices of the input; nothing is copied.

use std::iter::FusedIterator;

/// Returns `true` for the two bytes that can start a line break.
#[inline]
pub(crate) const fn is_break(byte: u8) -> bool {
    byte == b'\n' || byte == b'\r'
}

/// Split `text` into its lines.
///
/// The returned iterator is cheap to clone. A clone resumes from the same
/// position; calling `lines_of` again starts over from the first line.
///
/// ```
/// use enumkit_core::lines_of;
///
/// let lines: Vec<&str> = lines_of("a\nb\r\nc").collect();
/// assert_eq!(lines, ["a", "b", "c"]);
/// ```
#[must_use]
pub fn lines_of(text: &str) -> Lines<'_> {
    Lines {
        rest: if text.is_empty() { None } else { Some(text) },
    }
}

/// Iterator over the lines of a string. Created by [`lines_of`].
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    /// Unconsumed input. `None` once the final line has been produced.
    rest: Option<&'a str>,
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest.take()?;
        let bytes = rest.as_bytes();

        let Some(pos) = bytes.iter().position(|&b| is_break(b)) else {
            return Some(rest);
        };

        // CRLF counts as a single break
        let width = if bytes[pos] == b'\r' && bytes.get(pos + 1) == Some(&b'\n') {
            2
        } else {
            1
        };

        let remainder = &rest[pos + width..];
        if !remainder.is_empty() {
            self.rest = Some(remainder);
        }

        Some(&rest[..pos])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.rest {
            // Every byte could be a break, and a non-empty tail is always one line
            Some(rest) => (1, Some(rest.len())),
            None => (0, Some(0)),
        }
    }
}

impl FusedIterator for Lines<'_> {}

// =============================================================================
// TESTS
// =============================================================================
