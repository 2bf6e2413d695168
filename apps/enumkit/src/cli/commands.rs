//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.
//! Every command streams its input through `read_lines`, so the file handle
//! is closed as soon as the command stops reading, including on error.

use enumkit_core::{EnumError, Grid, LineReader, enumerate2d, ordered_map_of, read_lines};
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

// =============================================================================
// INPUT HELPERS
// =============================================================================

/// Validate an input path.
///
/// Canonicalizes the path (resolving symlinks and "..") and ensures it is a
/// regular file.
fn validate_file_path(path: &Path) -> Result<PathBuf, EnumError> {
    let canonical = path.canonicalize().map_err(|e| {
        EnumError::Io(format!("Invalid file path '{}': {}", path.display(), e))
    })?;

    if !canonical.is_file() {
        return Err(EnumError::Io(format!(
            "Path '{}' is not a regular file",
            path.display()
        )));
    }

    Ok(canonical)
}

/// Open `path` and enumerate its lines.
fn open_lines(path: &Path) -> Result<LineReader<BufReader<File>>, EnumError> {
    let canonical = validate_file_path(path)?;
    let file = File::open(&canonical).map_err(|e| {
        EnumError::Io(format!("Cannot open '{}': {}", path.display(), e))
    })?;

    tracing::debug!(path = %canonical.display(), "Opened input");
    Ok(read_lines(BufReader::new(file)))
}

fn write_json<W: Write>(out: &mut W, value: &serde_json::Value) -> Result<(), EnumError> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| EnumError::Serialization(e.to_string()))?;
    writeln!(out, "{}", text)?;
    Ok(())
}

/// Returns `true` for lines that carry no data: blank or `#` comments.
fn is_skippable(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with('#')
}

/// Split one `key<separator>value` line.
///
/// Key and value are trimmed. A line without the separator, or with an
/// empty key, is malformed.
pub fn parse_pair(
    line: &str,
    separator: &str,
    line_no: usize,
) -> Result<(String, String), EnumError> {
    let (key, value) = line
        .split_once(separator)
        .ok_or(EnumError::MalformedPair { line: line_no })?;

    let key = key.trim();
    if key.is_empty() {
        return Err(EnumError::MalformedPair { line: line_no });
    }

    Ok((key.to_string(), value.trim().to_string()))
}

// =============================================================================
// LINES COMMAND
// =============================================================================

/// List every line of `file` with its index.
pub fn cmd_lines<W: Write>(file: &Path, json_mode: bool, out: &mut W) -> Result<(), EnumError> {
    let lines = open_lines(file)?;

    if json_mode {
        let mut entries = Vec::new();
        for (index, line) in lines.enumerate() {
            let line = line?;
            entries.push(serde_json::json!({
                "index": index,
                "line": line,
            }));
        }
        tracing::debug!(lines = entries.len(), "Listed lines");
        write_json(out, &serde_json::Value::Array(entries))
    } else {
        let mut count = 0usize;
        for (index, line) in lines.enumerate() {
            writeln!(out, "{}\t{}", index, line?)?;
            count += 1;
        }
        tracing::debug!(lines = count, "Listed lines");
        Ok(())
    }
}

// =============================================================================
// PAIRS COMMAND
// =============================================================================

/// Collect the `key<separator>value` lines of `file` into an ordered mapping.
///
/// Blank lines and `#` comments are skipped. When a key repeats, the last
/// occurrence wins.
pub fn cmd_pairs<W: Write>(
    file: &Path,
    separator: &str,
    json_mode: bool,
    out: &mut W,
) -> Result<(), EnumError> {
    let mut pairs = Vec::new();
    for (line_no, line) in open_lines(file)?.enumerate() {
        let line = line?;
        if is_skippable(&line) {
            continue;
        }
        pairs.push(parse_pair(&line, separator, line_no)?);
    }

    let parsed = pairs.len();
    let map = ordered_map_of(Some(pairs));

    let overwritten = parsed - map.len();
    if overwritten > 0 {
        tracing::warn!(overwritten, "Duplicate keys overwritten by later lines");
    }
    tracing::debug!(pairs = parsed, keys = map.len(), "Collected pairs");

    if json_mode {
        let object: serde_json::Map<String, serde_json::Value> = map
            .into_iter()
            .map(|(k, v)| (k, serde_json::Value::String(v)))
            .collect();
        write_json(out, &serde_json::Value::Object(object))
    } else {
        for (key, value) in &map {
            writeln!(out, "{}\t{}", key, value)?;
        }
        Ok(())
    }
}

// =============================================================================
// GRID COMMAND
// =============================================================================

/// Parse `file` as a delimited table and list every cell row-major.
///
/// Blank lines are skipped. Rows of differing width are rejected.
pub fn cmd_grid<W: Write>(
    file: &Path,
    delimiter: &str,
    json_mode: bool,
    out: &mut W,
) -> Result<(), EnumError> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    for line in open_lines(file)? {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        rows.push(
            line.split(delimiter)
                .map(|cell| cell.trim().to_string())
                .collect(),
        );
    }

    let grid = Grid::from_rows(rows)?;
    tracing::debug!(rows = grid.rows(), cols = grid.cols(), "Parsed grid");

    if json_mode {
        let cells: Vec<serde_json::Value> = enumerate2d(&grid)
            .map(|(row, col, value)| {
                serde_json::json!({
                    "row": row,
                    "col": col,
                    "value": value,
                })
            })
            .collect();
        write_json(
            out,
            &serde_json::json!({
                "rows": grid.rows(),
                "cols": grid.cols(),
                "cells": cells,
            }),
        )
    } else {
        for (row, col, value) in enumerate2d(&grid) {
            writeln!(out, "{}\t{}\t{}", row, col, value)?;
        }
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_pair_trims_key_and_value() {
        let pair = parse_pair("  name = Ada Lovelace ", "=", 0).expect("parse");
        assert_eq!(pair, ("name".to_string(), "Ada Lovelace".to_string()));
    }

    #[test]
    fn parse_pair_splits_on_first_separator() {
        let pair = parse_pair("url=http://x?a=b", "=", 0).expect("parse");
        assert_eq!(pair.1, "http://x?a=b");
    }

    #[test]
    fn parse_pair_rejects_missing_separator() {
        assert_eq!(
            parse_pair("no separator", "=", 4),
            Err(EnumError::MalformedPair { line: 4 })
        );
    }

    #[test]
    fn parse_pair_rejects_empty_key() {
        assert_eq!(
            parse_pair(" = value", "=", 2),
            Err(EnumError::MalformedPair { line: 2 })
        );
    }

    #[test]
    fn skippable_lines() {
        assert!(is_skippable(""));
        assert!(is_skippable("   "));
        assert!(is_skippable("# comment"));
        assert!(!is_skippable("k=v"));
    }
}
