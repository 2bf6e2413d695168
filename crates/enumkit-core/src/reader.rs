//! # Reader-backed Line Splitter
//!
//! Line enumeration over any [`BufRead`] source, with the same break rules
//! as [`lines_of`](crate::lines_of).
//!
//! The [`LineReader`] owns its reader for the whole enumeration. Dropping
//! the `LineReader` drops the reader, so the source is released on every
//! exit path: full consumption, early abandonment, or an error.

use crate::lines::is_break;
use crate::types::EnumError;
use std::io::{self, BufRead};
use std::iter::FusedIterator;

/// Enumerate the lines of `reader`, taking ownership of it.
///
/// Each item is a `Result`: an I/O failure or a line that is not valid
/// UTF-8 is yielded once as an error, after which the iterator is finished.
///
/// ```
/// use enumkit_core::read_lines;
/// use std::io::Cursor;
///
/// let lines: Vec<String> = read_lines(Cursor::new("a\r\nb\rc\n"))
///     .collect::<Result<_, _>>()
///     .expect("in-memory read");
/// assert_eq!(lines, ["a", "b", "c"]);
/// ```
pub fn read_lines<R: BufRead>(reader: R) -> LineReader<R> {
    LineReader {
        reader,
        line: 0,
        skip_lf: false,
        done: false,
    }
}

/// Iterator over the lines of a [`BufRead`] source. Created by [`read_lines`].
#[derive(Debug)]
pub struct LineReader<R> {
    reader: R,
    /// Number of lines produced so far.
    line: usize,
    /// The previous line ended on `\r` at a buffer boundary; a leading `\n`
    /// in the next fill belongs to that break.
    skip_lf: bool,
    done: bool,
}

impl<R> LineReader<R> {
    /// Number of lines yielded so far.
    #[must_use]
    pub fn lines_read(&self) -> usize {
        self.line
    }

    /// Borrow the underlying reader.
    pub fn get_ref(&self) -> &R {
        &self.reader
    }
}

impl<R: BufRead> LineReader<R> {
    /// Stop enumerating and hand the reader back to the caller.
    ///
    /// The reader is positioned after the last break yielded. When that
    /// break was a `\r` at the end of a buffer fill, a `\n` waiting at the
    /// front of the next fill is consumed first, so the caller does not see
    /// half of a `\r\n`. A read error while checking is left for the
    /// caller's next read to report.
    pub fn into_inner(mut self) -> R {
        if self.skip_lf {
            let pending_lf = loop {
                match self.reader.fill_buf() {
                    Ok(bytes) => break bytes.first() == Some(&b'\n'),
                    Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                    Err(_) => break false,
                }
            };
            if pending_lf {
                self.reader.consume(1);
            }
        }
        self.reader
    }

    /// Read the raw bytes of the next line, without its break.
    ///
    /// Returns `Ok(None)` at end of input when no bytes remain for a line.
    fn read_line_bytes(&mut self) -> io::Result<Option<Vec<u8>>> {
        let mut buf = Vec::new();

        loop {
            let available = match self.reader.fill_buf() {
                Ok(bytes) => bytes,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };

            if available.is_empty() {
                return Ok(if buf.is_empty() { None } else { Some(buf) });
            }

            if self.skip_lf {
                self.skip_lf = false;
                if available[0] == b'\n' {
                    self.reader.consume(1);
                    continue;
                }
            }

            match available.iter().position(|&b| is_break(b)) {
                Some(pos) => {
                    buf.extend_from_slice(&available[..pos]);
                    let is_cr = available[pos] == b'\r';
                    let used = if is_cr && available.get(pos + 1) == Some(&b'\n') {
                        pos + 2
                    } else {
                        self.skip_lf = is_cr;
                        pos + 1
                    };
                    self.reader.consume(used);
                    return Ok(Some(buf));
                }
                None => {
                    buf.extend_from_slice(available);
                    let used = available.len();
                    self.reader.consume(used);
                }
            }
        }
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = Result<String, EnumError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = match self.read_line_bytes() {
            Ok(Some(bytes)) => String::from_utf8(bytes)
                .map_err(|_| EnumError::InvalidUtf8 { line: self.line }),
            Ok(None) => {
                self.done = true;
                return None;
            }
            Err(e) => Err(EnumError::from(e)),
        };

        if result.is_err() {
            self.done = true;
        } else {
            self.line += 1;
        }

        Some(result)
    }
}

impl<R: BufRead> FusedIterator for LineReader<R> {}

// =============================================================================
// TESTS
// =============================================================================
