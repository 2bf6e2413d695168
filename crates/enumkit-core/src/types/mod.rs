//! # Core Type Definitions
//!
//! Shared types for the enumeration helpers:
//! - Element shapes yielded by the traversals (`Indexed1d`, `Indexed2d` items)
//! - Error types (`EnumError`)
//!
//! The traversal operations themselves are infallible. `EnumError` is raised
//! only where input can be malformed: building a `Grid` from untrusted
//! dimensions, or reading lines from an I/O source.

use thiserror::Error;

// =============================================================================
// ELEMENT SHAPES
// =============================================================================

/// A single element of a 1-D indexed traversal: `(index, value)`.
pub type IndexedItem<'a, T> = (usize, &'a T);

/// A single element of a 2-D indexed traversal: `(row, column, value)`.
pub type GridItem<'a, T> = (usize, usize, &'a T);

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in enumkit operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnumError {
    /// The number of cells does not match `rows * cols`.
    #[error("Shape mismatch: {rows}x{cols} grid cannot hold {len} cells")]
    ShapeMismatch {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
        /// Number of cells actually supplied.
        len: usize,
    },

    /// A row of a nested input has a different width than the first row.
    #[error("Jagged row {row}: expected {expected} columns, found {found}")]
    JaggedRow {
        /// Zero-based index of the offending row.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },

    /// An I/O error occurred while reading lines.
    #[error("I/O error: {0}")]
    Io(String),

    /// A line read from an I/O source is not valid UTF-8.
    #[error("Invalid UTF-8 on line {line}")]
    InvalidUtf8 {
        /// Zero-based line number.
        line: usize,
    },

    /// A line could not be split into a key and a value.
    #[error("Malformed key/value pair on line {line}")]
    MalformedPair {
        /// Zero-based line number.
        line: usize,
    },

    /// A serialization or deserialization error occurred.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for EnumError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_mismatch_message_reports_dimensions() {
        let err = EnumError::ShapeMismatch {
            rows: 2,
            cols: 3,
            len: 5,
        };
        assert_eq!(
            err.to_string(),
            "Shape mismatch: 2x3 grid cannot hold 5 cells"
        );
    }

    #[test]
    fn io_error_converts_to_message() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "short read");
        let err = EnumError::from(io);
        assert_eq!(err, EnumError::Io("short read".to_string()));
    }
}
