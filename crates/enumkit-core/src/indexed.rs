//! # Indexed 1-D Traversal
//!
//! Index-annotated enumeration of a slice: `(index, &value)` pairs with the
//! index counting from zero in source order.

use crate::types::IndexedItem;
use std::iter::FusedIterator;
use std::slice;

/// Enumerate `items` with their positions.
///
/// Yields exactly `items.len()` pairs. The slice is only borrowed.
///
/// ```
/// use enumkit_core::enumerate;
///
/// let pairs: Vec<(usize, &char)> = enumerate(&['x', 'y']).collect();
/// assert_eq!(pairs, [(0, &'x'), (1, &'y')]);
/// ```
#[must_use]
pub fn enumerate<T>(items: &[T]) -> Indexed<'_, T> {
    Indexed {
        iter: items.iter(),
        front: 0,
    }
}

/// Iterator over `(index, &value)` pairs. Created by [`enumerate`].
#[derive(Debug)]
pub struct Indexed<'a, T> {
    iter: slice::Iter<'a, T>,
    /// Index of the next element yielded from the front.
    front: usize,
}

impl<T> Clone for Indexed<'_, T> {
    fn clone(&self) -> Self {
        Self {
            iter: self.iter.clone(),
            front: self.front,
        }
    }
}

impl<'a, T> Iterator for Indexed<'a, T> {
    type Item = IndexedItem<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.iter.next()?;
        let index = self.front;
        self.front += 1;
        Some((index, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        let skipped = n.min(self.iter.len());
        self.front += skipped;
        let value = self.iter.nth(n)?;
        let index = self.front;
        self.front += 1;
        Some((index, value))
    }
}

impl<T> DoubleEndedIterator for Indexed<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let value = self.iter.next_back()?;
        Some((self.front + self.iter.len(), value))
    }
}

impl<T> ExactSizeIterator for Indexed<'_, T> {}

impl<T> FusedIterator for Indexed<'_, T> {}
