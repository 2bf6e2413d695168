//! # enumkit-core
//!
//! Generic enumeration helpers - THE LOGIC.
//!
//! Small, lazy, single-pass transformations over in-memory inputs:
//!
//! - `lines` → split text into lines on `\n`, `\r\n`, or `\r`
//! - `reader` → the same line splitting over an owned `BufRead` source
//! - `mapping` → mapping ↔ key/value pair sequences
//! - `indexed` → `(index, value)` enumeration of slices
//! - `grid` → rectangular 2-D arrays and `(row, col, value)` enumeration
//!
//! ## Constraints
//!
//! - Pure Rust: no async, no network, no global state
//! - Lazy: every sequence is produced on demand by an `Iterator`
//! - Borrowing: inputs are never copied or mutated

// =============================================================================
// MODULES
// =============================================================================

pub mod grid;
pub mod indexed;
pub mod lines;
pub mod mapping;
pub mod reader;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types
// =============================================================================

pub use types::{EnumError, GridItem, IndexedItem};

// =============================================================================
// RE-EXPORTS: Operations
// =============================================================================

pub use grid::{Grid, Indexed2d, Rectangular, enumerate2d};
pub use indexed::{Indexed, enumerate};
pub use lines::{Lines, lines_of};
pub use mapping::{Mapping, collect_map, extend_map, map_of, ordered_map_of, pairs_of};
pub use reader::{LineReader, read_lines};
