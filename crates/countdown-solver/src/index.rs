//! Map from target value to the distinct paths reaching it.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use countdown_core::in_target_band;
use indexmap::IndexSet as PathSet;

/// Distinct path texts per target in the band.
///
/// Paths are deduplicated by text alone. Two derivations from different
/// source positions that print the same (for example `(100 + 100)` built
/// from positions {0, 1} and from {2, 3}) are stored once.
///
/// Paths for a target iterate in discovery order. Targets iterate in
/// ascending order, or in the order they were first reached through
/// [`SolutionIndex::targets_by_discovery`].
#[derive(Debug, Default)]
pub struct SolutionIndex {
    solutions: BTreeMap<u32, PathSet<String>>,
    discovery: Vec<u32>,
    path_count: usize,
}

impl SolutionIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `path` under `value`.
    ///
    /// Returns true if the path text was new for that value. Values outside
    /// the target band are ignored and return false.
    pub fn register(&mut self, value: u32, path: &str) -> bool {
        if !in_target_band(value) {
            return false;
        }
        let paths = match self.solutions.entry(value) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                self.discovery.push(value);
                entry.insert(PathSet::new())
            }
        };
        if paths.contains(path) {
            return false;
        }
        paths.insert(path.to_owned());
        self.path_count += 1;
        true
    }

    /// Returns the paths for `target` in discovery order (empty if none).
    pub fn paths(&self, target: u32) -> impl Iterator<Item = &str> {
        self.solutions
            .get(&target)
            .into_iter()
            .flat_map(|paths| paths.iter().map(String::as_str))
    }

    /// Number of distinct paths recorded for `target`.
    pub fn path_count_for(&self, target: u32) -> usize {
        self.solutions.get(&target).map_or(0, PathSet::len)
    }

    #[inline]
    pub fn contains(&self, target: u32) -> bool {
        self.solutions.contains_key(&target)
    }

    /// Reachable targets in ascending order.
    pub fn targets(&self) -> impl Iterator<Item = u32> + '_ {
        self.solutions.keys().copied()
    }

    /// Reachable targets in the order their first path was registered.
    pub fn targets_by_discovery(&self) -> impl Iterator<Item = u32> + '_ {
        self.discovery.iter().copied()
    }

    /// Number of reachable targets.
    #[inline]
    pub fn target_count(&self) -> usize {
        self.solutions.len()
    }

    /// Total number of distinct (target, path) entries.
    #[inline]
    pub fn path_count(&self) -> usize {
        self.path_count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    /// Iterates `(target, paths)` in ascending target order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &PathSet<String>)> {
        self.solutions.iter().map(|(&target, paths)| (target, paths))
    }
}
