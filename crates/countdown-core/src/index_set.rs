//! Sets of source positions consumed by an intermediate.

use std::fmt;

use crate::source::SOURCE_COUNT;

/// A set of source positions, stored as a bitmask.
///
/// Ordering and hashing follow the bitmask, so an `IndexSet` doubles as the
/// sorted-index component of the intermediate dedup key.
///
/// # Examples
///
/// ```
/// use countdown_core::IndexSet;
///
/// let left = IndexSet::single(0).union(IndexSet::single(3));
/// let right = IndexSet::single(1);
///
/// assert!(left.is_disjoint(right));
/// assert_eq!(left.union(right).len(), 3);
/// assert_eq!(left.iter().collect::<Vec<_>>(), vec![0, 3]);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct IndexSet {
    bits: u8,
}

impl IndexSet {
    /// The empty set.
    pub const EMPTY: IndexSet = IndexSet { bits: 0 };

    /// Number of distinct non-empty sets.
    pub const NON_EMPTY_COUNT: usize = (1 << SOURCE_COUNT) - 1;

    /// Creates a set holding one source position.
    ///
    /// # Panics
    ///
    /// Panics if `index >= SOURCE_COUNT`.
    #[inline]
    pub const fn single(index: usize) -> Self {
        assert!(index < SOURCE_COUNT, "source index out of range");
        IndexSet { bits: 1 << index }
    }

    /// Returns the raw bitmask.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.bits
    }

    #[inline]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    #[inline]
    pub const fn contains(self, index: usize) -> bool {
        index < SOURCE_COUNT && self.bits & (1 << index) != 0
    }

    #[inline]
    pub const fn is_disjoint(self, other: IndexSet) -> bool {
        self.bits & other.bits == 0
    }

    #[inline]
    pub const fn union(self, other: IndexSet) -> IndexSet {
        IndexSet {
            bits: self.bits | other.bits,
        }
    }

    /// Iterates the positions in ascending order.
    pub fn iter(self) -> impl Iterator<Item = usize> {
        (0..SOURCE_COUNT).filter(move |&idx| self.contains(idx))
    }
}

impl fmt::Debug for IndexSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<usize> for IndexSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        iter.into_iter()
            .fold(IndexSet::EMPTY, |set, idx| set.union(IndexSet::single(idx)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_and_contains() {
        let set = IndexSet::single(4);
        assert!(set.contains(4));
        assert!(!set.contains(3));
        assert!(!set.contains(SOURCE_COUNT));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_disjoint_union() {
        let a: IndexSet = [0, 1].into_iter().collect();
        let b: IndexSet = [2, 5].into_iter().collect();
        let c: IndexSet = [1, 2].into_iter().collect();

        assert!(a.is_disjoint(b));
        assert!(!a.is_disjoint(c));
        assert_eq!(a.union(b).iter().collect::<Vec<_>>(), vec![0, 1, 2, 5]);
    }

    #[test]
    fn test_key_ignores_insertion_order() {
        let a: IndexSet = [3, 0, 2].into_iter().collect();
        let b: IndexSet = [0, 2, 3].into_iter().collect();
        assert_eq!(a, b);
        assert_eq!(format!("{:?}", a), "{0, 2, 3}");
    }

    #[test]
    fn test_full_set() {
        let all: IndexSet = (0..SOURCE_COUNT).collect();
        assert_eq!(all.len(), SOURCE_COUNT);
        assert_eq!(all.bits() as usize, IndexSet::NON_EMPTY_COUNT);
    }
}
