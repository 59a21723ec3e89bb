//! Deduplicated storage of intermediate results.

use std::collections::HashSet;

use countdown_core::IndexSet;

/// A value produced during search, with the path that produced it and the
/// source positions it consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Intermediate {
    /// The value, always positive.
    pub value: u32,
    /// Fully parenthesized expression text producing `value`.
    pub path: String,
    /// Source positions consumed by `path`.
    pub used: IndexSet,
}

impl Intermediate {
    /// Creates an intermediate for one source number.
    pub fn source(index: usize, value: u32) -> Self {
        Self {
            value,
            path: value.to_string(),
            used: IndexSet::single(index),
        }
    }

    /// Returns the dedup key `(value, used)`.
    #[inline]
    pub fn key(&self) -> (u32, IndexSet) {
        (self.value, self.used)
    }
}

/// Append-only store of intermediates, unique by `(value, used)`.
///
/// The first intermediate inserted for a key wins; later ones with the same
/// key are ignored. Insertion order is preserved and is the order in which
/// the search visits intermediates.
#[derive(Debug, Default)]
pub struct IntermediateStore {
    entries: Vec<Intermediate>,
    keys: HashSet<(u32, IndexSet)>,
}

impl IntermediateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `intermediate` unless its key is already present.
    ///
    /// Returns true if it was inserted.
    pub fn insert(&mut self, intermediate: Intermediate) -> bool {
        if !self.keys.insert(intermediate.key()) {
            return false;
        }
        self.entries.push(intermediate);
        true
    }

    /// Returns true if an intermediate with this key is stored.
    #[inline]
    pub fn contains(&self, value: u32, used: IndexSet) -> bool {
        self.keys.contains(&(value, used))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Intermediate> {
        self.entries.get(index)
    }

    /// Returns all intermediates in insertion order.
    #[inline]
    pub fn as_slice(&self) -> &[Intermediate] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &Intermediate> {
        self.entries.iter()
    }
}
