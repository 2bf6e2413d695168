//! # Property-Based Tests
//!
//! Invariants of the enumeration helpers, checked with proptest.

use enumkit_core::{
    Grid, enumerate, enumerate2d, lines_of, map_of, ordered_map_of, pairs_of, read_lines,
};
use proptest::collection::{btree_map, hash_map, vec};
use proptest::prelude::*;
use std::collections::HashMap;
use std::io::Cursor;

/// Strategy for a single non-empty line without break characters.
///
/// Empty lines are covered by unit tests; here they would let a `\r` break
/// and a following `\n` break fuse into one `\r\n`.
fn line() -> impl Strategy<Value = String> {
    "[^\r\n]{1,12}"
}

/// Strategy for a line-break convention.
fn line_break() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("\n"), Just("\r\n"), Just("\r")]
}

// =============================================================================
// PROPERTY TESTS
// =============================================================================

proptest! {
    /// Joining lines with arbitrary breaks and splitting again recovers them.
    #[test]
    fn lines_split_exactly_at_breaks(
        parts in vec((line(), line_break()), 1..20),
        terminated in any::<bool>()
    ) {
        let mut text = String::new();
        for (i, (part, brk)) in parts.iter().enumerate() {
            text.push_str(part);
            if i + 1 < parts.len() || terminated {
                text.push_str(brk);
            }
        }

        let expected: Vec<&str> = parts.iter().map(|(part, _)| part.as_str()).collect();
        let actual: Vec<&str> = lines_of(&text).collect();
        prop_assert_eq!(actual, expected);
    }

    /// Lines never contain break characters.
    #[test]
    fn lines_contain_no_breaks(text in ".{0,200}") {
        for line in lines_of(&text) {
            prop_assert!(!line.contains(['\r', '\n']));
        }
    }

    /// The reader-backed splitter agrees with the in-memory splitter.
    #[test]
    fn reader_agrees_with_in_memory(text in "[a-c\r\n]{0,64}") {
        let expected: Vec<String> = lines_of(&text).map(str::to_owned).collect();
        let actual: Vec<String> = read_lines(Cursor::new(text.as_bytes()))
            .collect::<Result<_, _>>()
            .expect("in-memory read");
        prop_assert_eq!(actual, expected);
    }

    /// map_of(pairs_of(m)) reconstructs m.
    #[test]
    fn pairs_round_trip_hash_map(source in hash_map(any::<u16>(), any::<i64>(), 0..64)) {
        let rebuilt: HashMap<u16, i64> =
            map_of(Some(pairs_of(&source).map(|(k, v)| (*k, *v))));
        prop_assert_eq!(rebuilt, source);
    }

    /// Round trip through an ordered map preserves content and key order.
    #[test]
    fn pairs_round_trip_btree_map(source in btree_map("[a-z]{1,4}", any::<u8>(), 0..32)) {
        let rebuilt = ordered_map_of(Some(pairs_of(&source)));
        prop_assert_eq!(rebuilt.len(), source.len());

        let keys: Vec<&String> = rebuilt.keys().copied().collect();
        let source_keys: Vec<&String> = source.keys().collect();
        prop_assert_eq!(keys, source_keys);
    }

    /// With ordered input, the last pair for each key wins.
    #[test]
    fn map_of_last_write_wins(pairs in vec((0u8..8, any::<u32>()), 0..64)) {
        let map = map_of(Some(pairs.iter().copied()));

        for (key, value) in &map {
            let last = pairs.iter().rev().find(|(k, _)| k == key).map(|(_, v)| v);
            prop_assert_eq!(Some(value), last);
        }
        let distinct: std::collections::BTreeSet<u8> = pairs.iter().map(|(k, _)| *k).collect();
        prop_assert_eq!(map.len(), distinct.len());
    }

    /// enumerate yields n pairs with indices 0..n and matching values.
    #[test]
    fn enumerate_indexes_every_element(data in vec(any::<i32>(), 0..100)) {
        let pairs: Vec<(usize, &i32)> = enumerate(&data).collect();
        prop_assert_eq!(pairs.len(), data.len());
        for (expected_index, (index, value)) in pairs.into_iter().enumerate() {
            prop_assert_eq!(index, expected_index);
            prop_assert_eq!(*value, data[index]);
        }
    }

    /// enumerate2d yields R*C triples in row-major order.
    #[test]
    fn enumerate2d_is_row_major(rows in 0usize..12, cols in 0usize..12) {
        let grid = Grid::from_fn(rows, cols, |r, c| (r, c));
        let triples: Vec<_> = enumerate2d(&grid).collect();
        prop_assert_eq!(triples.len(), rows * cols);

        for (i, (r, c, value)) in triples.into_iter().enumerate() {
            prop_assert_eq!((r, c), (i / cols, i % cols));
            prop_assert_eq!(*value, (r, c));
        }
    }

    /// from_rows accepts exactly the rectangular inputs.
    #[test]
    fn from_rows_accepts_only_rectangles(widths in vec(0usize..4, 1..6)) {
        let rows: Vec<Vec<u8>> = widths.iter().map(|&w| vec![0; w]).collect();
        let rectangular = widths.iter().all(|&w| w == widths[0]);
        prop_assert_eq!(Grid::from_rows(rows).is_ok(), rectangular);
    }
}
