//! # Indexed 2-D Traversal
//!
//! Rectangular two-dimensional arrays and their row-major enumeration.
//!
//! - [`Rectangular`]: anything with a fixed `rows × cols` shape
//! - [`Grid`]: an owned, heap-backed rectangular array
//! - [`enumerate2d`]: `(row, col, &value)` triples in row-major order
//!
//! ## Shape Guarantees
//!
//! Every `Rectangular` value is rectangular by construction. Fixed arrays
//! `[[T; C]; R]` and row slices `[[T; C]]` are rectangular through their
//! types; `Grid` checks its shape when it is built and when it is
//! deserialized, so a jagged input never reaches the traversal.

use crate::types::{EnumError, GridItem};
use serde::{Deserialize, Serialize};
use std::iter::FusedIterator;
use std::ops::{Index, IndexMut};

// =============================================================================
// RECTANGULAR TRAIT
// =============================================================================

/// A two-dimensional array with a fixed row and column count.
pub trait Rectangular {
    /// Element type.
    type Item;

    /// `(rows, cols)`.
    fn shape(&self) -> (usize, usize);

    /// The element at `(row, col)`, or `None` outside the shape.
    fn cell(&self, row: usize, col: usize) -> Option<&Self::Item>;
}

impl<T, const C: usize> Rectangular for [[T; C]] {
    type Item = T;

    fn shape(&self) -> (usize, usize) {
        (self.len(), C)
    }

    fn cell(&self, row: usize, col: usize) -> Option<&T> {
        self.get(row)?.get(col)
    }
}

impl<T, const R: usize, const C: usize> Rectangular for [[T; C]; R] {
    type Item = T;

    fn shape(&self) -> (usize, usize) {
        (R, C)
    }

    fn cell(&self, row: usize, col: usize) -> Option<&T> {
        self.get(row)?.get(col)
    }
}

// =============================================================================
// GRID
// =============================================================================

/// Owned rectangular array stored row-major.
///
/// Serializes as `{ "rows": .., "cols": .., "cells": [..] }`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGrid<T>")]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

/// Unchecked wire form of a [`Grid`].
#[derive(Deserialize)]
struct RawGrid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T> TryFrom<RawGrid<T>> for Grid<T> {
    type Error = EnumError;

    fn try_from(raw: RawGrid<T>) -> Result<Self, Self::Error> {
        Self::from_vec(raw.rows, raw.cols, raw.cells)
    }
}

/// Number of cells in a `rows × cols` shape.
///
/// # Panics
///
/// Panics if the count overflows `usize`, like `Vec::with_capacity` does for
/// an oversized capacity.
#[track_caller]
fn cell_count(rows: usize, cols: usize) -> usize {
    match rows.checked_mul(cols) {
        Some(count) => count,
        None => shape_overflow(rows, cols),
    }
}

#[cold]
#[track_caller]
#[allow(clippy::panic)]
fn shape_overflow(rows: usize, cols: usize) -> ! {
    panic!("grid shape {rows}x{cols} overflows usize")
}

impl<T> Grid<T> {
    /// Create a `rows × cols` grid with every cell set to `fill`.
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` overflows `usize`.
    #[track_caller]
    pub fn new(rows: usize, cols: usize, fill: T) -> Self
    where
        T: Clone,
    {
        Self {
            rows,
            cols,
            cells: vec![fill; cell_count(rows, cols)],
        }
    }

    /// Create a `rows × cols` grid by calling `f(row, col)` for each cell in
    /// row-major order.
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` overflows `usize`.
    #[track_caller]
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut cells = Vec::with_capacity(cell_count(rows, cols));
        for row in 0..rows {
            for col in 0..cols {
                cells.push(f(row, col));
            }
        }
        Self { rows, cols, cells }
    }

    /// Wrap a row-major cell vector.
    ///
    /// Returns `EnumError::ShapeMismatch` unless `cells.len() == rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, cells: Vec<T>) -> Result<Self, EnumError> {
        if rows.checked_mul(cols) != Some(cells.len()) {
            return Err(EnumError::ShapeMismatch {
                rows,
                cols,
                len: cells.len(),
            });
        }
        Ok(Self { rows, cols, cells })
    }

    /// Build a grid from nested rows.
    ///
    /// The first row fixes the column count. Returns `EnumError::JaggedRow`
    /// for the first row whose width differs.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, EnumError> {
        let row_count = rows.len();
        let cols = rows.first().map_or(0, Vec::len);

        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != cols)
        {
            return Err(EnumError::JaggedRow {
                row,
                expected: cols,
                found,
            });
        }

        let cells = rows.into_iter().flatten().collect();
        Ok(Self {
            rows: row_count,
            cols,
            cells,
        })
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the grid has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn offset(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        row.checked_mul(self.cols)?.checked_add(col)
    }

    /// The cell at `(row, col)`, or `None` if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.offset(row, col).and_then(|i| self.cells.get(i))
    }

    /// Mutable access to the cell at `(row, col)`.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.offset(row, col).and_then(|i| self.cells.get_mut(i))
    }

    /// One row as a slice.
    pub fn row(&self, row: usize) -> Option<&[T]> {
        if row >= self.rows {
            return None;
        }
        let start = row.checked_mul(self.cols)?;
        self.cells.get(start..start.checked_add(self.cols)?)
    }

    /// All cells in row-major order.
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    /// Split back into nested rows.
    pub fn into_rows(self) -> Vec<Vec<T>> {
        let cols = self.cols;
        let mut cells = self.cells.into_iter();
        (0..self.rows)
            .map(|_| cells.by_ref().take(cols).collect())
            .collect()
    }
}

#[cold]
#[track_caller]
#[allow(clippy::panic)]
fn out_of_bounds(row: usize, col: usize, rows: usize, cols: usize) -> ! {
    panic!("index ({row}, {col}) out of bounds for {rows}x{cols} grid")
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        match self.offset(row, col) {
            Some(i) => &self.cells[i],
            None => out_of_bounds(row, col, self.rows, self.cols),
        }
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    #[track_caller]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        match self.offset(row, col) {
            Some(i) => &mut self.cells[i],
            None => out_of_bounds(row, col, self.rows, self.cols),
        }
    }
}

impl<T> Rectangular for Grid<T> {
    type Item = T;

    fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn cell(&self, row: usize, col: usize) -> Option<&T> {
        self.get(row, col)
    }
}

// =============================================================================
// ROW-MAJOR ENUMERATION
// =============================================================================

/// Enumerate every cell of `array` as `(row, col, &value)` in row-major
/// order: all columns of row 0, then row 1, and so on.
///
/// ```
/// use enumkit_core::enumerate2d;
///
/// let cells: Vec<(usize, usize, &u8)> = enumerate2d(&[[1, 2], [3, 4]]).collect();
/// assert_eq!(cells, [(0, 0, &1), (0, 1, &2), (1, 0, &3), (1, 1, &4)]);
/// ```
///
/// The iterator is exact-size. For zero-sized elements a shape can hold more
/// than `usize::MAX` cells; the size hint then has no upper bound and `len`
/// panics, while iteration itself still visits every cell in order.
pub fn enumerate2d<A: Rectangular + ?Sized>(array: &A) -> Indexed2d<'_, A> {
    let (rows, cols) = array.shape();
    Indexed2d {
        array,
        rows,
        cols,
        row: 0,
        col: 0,
    }
}

/// Iterator over `(row, col, &value)` triples. Created by [`enumerate2d`].
#[derive(Debug)]
pub struct Indexed2d<'a, A: ?Sized> {
    array: &'a A,
    rows: usize,
    cols: usize,
    /// Position of the next cell to yield.
    row: usize,
    col: usize,
}

impl<A: ?Sized> Clone for Indexed2d<'_, A> {
    fn clone(&self) -> Self {
        Self {
            array: self.array,
            rows: self.rows,
            cols: self.cols,
            row: self.row,
            col: self.col,
        }
    }
}

impl<'a, A: Rectangular + ?Sized> Iterator for Indexed2d<'a, A> {
    type Item = GridItem<'a, A::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.row >= self.rows || self.cols == 0 {
            return None;
        }

        let (row, col) = (self.row, self.col);
        let value = self.array.cell(row, col)?;

        self.col += 1;
        if self.col == self.cols {
            self.col = 0;
            self.row += 1;
        }

        Some((row, col, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.rows.saturating_sub(self.row))
            .checked_mul(self.cols)
            .and_then(|cells| cells.checked_sub(self.col));
        match remaining {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }
}

impl<A: Rectangular + ?Sized> ExactSizeIterator for Indexed2d<'_, A> {}

impl<A: Rectangular + ?Sized> FusedIterator for Indexed2d<'_, A> {}

// =============================================================================
// TESTS
// =============================================================================
