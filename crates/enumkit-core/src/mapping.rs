//! # Mapping Conversions
//!
//! Conversions between associative collections and key/value sequences.
//!
//! - [`pairs_of`]: mapping to a lazy sequence of `(&key, &value)` pairs
//! - [`map_of`] / [`ordered_map_of`]: key/value sequence to a new mapping
//! - [`extend_map`]: fold a key/value sequence into an existing mapping
//!
//! Nothing here clones keys or values. `pairs_of` lends references into the
//! source; the builders move the supplied pairs into the result. Feeding the
//! output of `pairs_of` to `map_of` therefore builds a mapping of references
//! that share identity with the source entries.
//!
//! ## Duplicate Keys
//!
//! When a sequence repeats a key, the pair encountered last wins. For
//! sequences drawn from an unordered source (such as iterating a `HashSet`)
//! the encounter order is itself unspecified, so callers must not assume
//! which of the colliding values survives.

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

// =============================================================================
// MAPPING TRAIT
// =============================================================================

/// Common interface over the associative collections this module converts.
///
/// Implemented for `HashMap` (any hasher) and `BTreeMap`.
pub trait Mapping {
    /// Key type.
    type Key;
    /// Value type.
    type Value;

    /// Insert a pair, overwriting any existing value for the key.
    ///
    /// Returns the value that was replaced, if any.
    fn insert_pair(&mut self, key: Self::Key, value: Self::Value) -> Option<Self::Value>;

    /// Iterate over the entries in the collection's native order.
    fn pairs(&self) -> impl Iterator<Item = (&Self::Key, &Self::Value)>;
}

impl<K: Eq + Hash, V, S: BuildHasher> Mapping for HashMap<K, V, S> {
    type Key = K;
    type Value = V;

    fn insert_pair(&mut self, key: K, value: V) -> Option<V> {
        self.insert(key, value)
    }

    fn pairs(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
    }
}

impl<K: Ord, V> Mapping for BTreeMap<K, V> {
    type Key = K;
    type Value = V;

    fn insert_pair(&mut self, key: K, value: V) -> Option<V> {
        self.insert(key, value)
    }

    fn pairs(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
    }
}

// =============================================================================
// MAPPING -> PAIRS
// =============================================================================

/// Enumerate the entries of `map` as `(key, value)` reference pairs.
///
/// Order follows the mapping: unspecified for `HashMap`, ascending key order
/// for `BTreeMap`. The order is stable for as long as the map is not
/// modified, which the shared borrow guarantees for the iterator's lifetime.
pub fn pairs_of<M: Mapping>(map: &M) -> impl Iterator<Item = (&M::Key, &M::Value)> {
    map.pairs()
}

// =============================================================================
// PAIRS -> MAPPING
// =============================================================================

/// Insert every pair of `pairs` into `map`, later pairs overwriting earlier
/// ones with the same key.
///
/// Returns the number of pairs consumed, including overwrites.
pub fn extend_map<M, I>(map: &mut M, pairs: I) -> usize
where
    M: Mapping,
    I: IntoIterator<Item = (M::Key, M::Value)>,
{
    let mut consumed = 0usize;
    for (key, value) in pairs {
        map.insert_pair(key, value);
        consumed = consumed.saturating_add(1);
    }
    consumed
}

/// Build a mapping of any [`Mapping`] type from an optional pair sequence.
///
/// `None` is the absent sequence and produces an empty mapping.
pub fn collect_map<M, I>(pairs: Option<I>) -> M
where
    M: Mapping + Default,
    I: IntoIterator<Item = (M::Key, M::Value)>,
{
    let mut map = M::default();
    if let Some(pairs) = pairs {
        extend_map(&mut map, pairs);
    }
    map
}

/// Build a `HashMap` from an optional pair sequence.
///
/// ```
/// use enumkit_core::map_of;
///
/// let map = map_of(Some([("a", 1), ("b", 2), ("a", 3)]));
/// assert_eq!(map.len(), 2);
/// assert_eq!(map["a"], 3);
///
/// let empty = map_of(None::<Vec<(&str, i32)>>);
/// assert!(empty.is_empty());
/// ```
pub fn map_of<K, V, I>(pairs: Option<I>) -> HashMap<K, V>
where
    K: Eq + Hash,
    I: IntoIterator<Item = (K, V)>,
{
    collect_map(pairs)
}

/// Build a `BTreeMap` from an optional pair sequence.
///
/// Same contract as [`map_of`], with deterministic key order.
pub fn ordered_map_of<K, V, I>(pairs: Option<I>) -> BTreeMap<K, V>
where
    K: Ord,
    I: IntoIterator<Item = (K, V)>,
{
    collect_map(pairs)
}

// =============================================================================
// TESTS
// =============================================================================
