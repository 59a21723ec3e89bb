//! Search statistics collection.
//!
//! Counters describing how much work each combination pass did. They are
//! collected during [`solve`](crate::solve) and exposed on the handle.

use std::time::Duration;

use serde::Serialize;

/// Statistics for a single combination pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PassStatistics {
    /// Index of this pass (0-based).
    pub pass_index: usize,
    /// Intermediates visible to this pass.
    pub intermediates_visible: usize,
    /// Ordered pairs with disjoint index sets that were combined.
    pub pairs_combined: u64,
    /// Candidates that were positive and within the pruning bound.
    pub candidates_admitted: u64,
    /// Candidates filtered out (zero, negative, inexact or too large).
    pub candidates_rejected: u64,
    /// Intermediates added to the store.
    pub new_intermediates: usize,
    /// Path texts added to the solution index.
    pub new_paths: usize,
}

impl PassStatistics {
    /// Creates empty statistics for pass `pass_index`.
    pub fn new(pass_index: usize, intermediates_visible: usize) -> Self {
        Self {
            pass_index,
            intermediates_visible,
            ..Self::default()
        }
    }

    /// Returns true if the pass added anything to the store or the index.
    pub fn made_progress(&self) -> bool {
        self.new_intermediates > 0 || self.new_paths > 0
    }
}

/// Complete statistics for one search.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SolveStatistics {
    /// Wall-clock time spent searching.
    #[serde(serialize_with = "serialize_millis")]
    pub duration: Duration,
    /// Pass limit in effect.
    pub pass_limit: usize,
    /// Statistics for each pass that ran.
    pub passes: Vec<PassStatistics>,
    /// Intermediates in the store at the end.
    pub intermediate_count: usize,
    /// Reachable targets at the end.
    pub target_count: usize,
    /// Distinct (target, path) entries at the end.
    pub path_count: usize,
}

impl SolveStatistics {
    /// Returns the number of passes that ran.
    pub fn pass_count(&self) -> usize {
        self.passes.len()
    }

    /// Returns true if the last pass added nothing, meaning the search
    /// reached closure before the pass limit stopped it.
    pub fn reached_fixpoint(&self) -> bool {
        self.passes.last().is_some_and(|pass| !pass.made_progress())
    }

    /// Total disjoint pairs combined across all passes.
    pub fn total_pairs_combined(&self) -> u64 {
        self.passes.iter().map(|pass| pass.pairs_combined).sum()
    }
}

fn serialize_millis<S: serde::Serializer>(
    duration: &Duration,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(duration.as_millis() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress() {
        let mut pass = PassStatistics::new(0, 6);
        assert!(!pass.made_progress());
        pass.new_paths = 1;
        assert!(pass.made_progress());
    }

    #[test]
    fn test_fixpoint() {
        let mut stats = SolveStatistics::default();
        assert!(!stats.reached_fixpoint());

        let mut busy = PassStatistics::new(0, 6);
        busy.new_intermediates = 4;
        busy.pairs_combined = 30;
        stats.passes.push(busy);
        assert!(!stats.reached_fixpoint());

        let mut idle = PassStatistics::new(1, 10);
        idle.pairs_combined = 12;
        stats.passes.push(idle);
        assert!(stats.reached_fixpoint());
        assert_eq!(stats.total_pairs_combined(), 42);
    }
}
