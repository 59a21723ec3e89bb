//! The combination engine.
//!
//! Starting from one intermediate per source number, each pass combines
//! every ordered pair of intermediates with disjoint index sets using the
//! four operations. Results that are positive and at most
//! [`TARGET_MAX`] are admitted; admitted results in the target band are
//! registered as solution paths, and results with a new `(value, indices)`
//! key are stored for later passes.
//!
//! A pass only sees the intermediates present when it starts. Passes repeat
//! until one adds nothing new or the pass limit is reached.

use std::collections::HashSet;

use countdown_core::{in_target_band, IndexSet, Operation, SourceNumbers, TARGET_MAX};
use tracing::debug;

use crate::index::SolutionIndex;
use crate::statistics::PassStatistics;
use crate::store::{Intermediate, IntermediateStore};

const MASK_COUNT: usize = IndexSet::NON_EMPTY_COUNT + 1;

/// Runs combination passes over a store and a solution index.
#[derive(Debug)]
pub struct CombinationEngine {
    store: IntermediateStore,
    solutions: SolutionIndex,
    pass_limit: usize,
    passes: Vec<PassStatistics>,
}

impl CombinationEngine {
    /// Creates an engine seeded with one intermediate per source number.
    ///
    /// Sources are stored whatever their size. Sources in the target band
    /// register their literal as a path.
    pub fn new(numbers: &SourceNumbers, pass_limit: usize) -> Self {
        let mut store = IntermediateStore::new();
        let mut solutions = SolutionIndex::new();
        for (idx, value) in numbers.iter() {
            let seed = Intermediate::source(idx, value);
            solutions.register(seed.value, &seed.path);
            store.insert(seed);
        }
        Self {
            store,
            solutions,
            pass_limit,
            passes: Vec::new(),
        }
    }

    /// Runs passes until closure or the pass limit.
    pub fn run(&mut self) {
        while self.passes.len() < self.pass_limit {
            let pass = self.run_pass();
            let progressed = pass.made_progress();
            self.passes.push(pass);
            if !progressed {
                break;
            }
        }
    }

    /// Runs a single pass over the intermediates currently stored.
    pub fn run_pass(&mut self) -> PassStatistics {
        let visible = self.store.len();
        let mut stats = PassStatistics::new(self.passes.len(), visible);
        let mut pending: Vec<Intermediate> = Vec::new();
        let mut pending_keys: HashSet<(u32, IndexSet)> = HashSet::new();

        let entries = &self.store.as_slice()[..visible];
        let partners = PartnerTable::build(entries);

        for left in entries {
            for &j in partners.partners(left.used) {
                let right = &entries[j];
                let used = left.used.union(right.used);
                stats.pairs_combined += 1;

                for (op, a, b) in candidate_order(left, right) {
                    let value = match op.apply(u64::from(a.value), u64::from(b.value)) {
                        Some(v) if v > 0 && v <= u64::from(TARGET_MAX) => v as u32,
                        _ => {
                            stats.candidates_rejected += 1;
                            continue;
                        }
                    };
                    stats.candidates_admitted += 1;

                    let is_new_key =
                        !self.store.contains(value, used) && pending_keys.insert((value, used));
                    let in_band = in_target_band(value);
                    if !is_new_key && !in_band {
                        continue;
                    }

                    let path = format!("({} {} {})", a.path, op.symbol(), b.path);
                    if in_band && self.solutions.register(value, &path) {
                        stats.new_paths += 1;
                    }
                    if is_new_key {
                        pending.push(Intermediate { value, path, used });
                    }
                }
            }
        }

        stats.new_intermediates = pending.len();
        for intermediate in pending {
            self.store.insert(intermediate);
        }

        debug!(
            event = "pass_end",
            pass_index = stats.pass_index as u64,
            pairs = stats.pairs_combined,
            new_intermediates = stats.new_intermediates as u64,
            new_paths = stats.new_paths as u64,
            intermediate_count = self.store.len() as u64,
        );
        stats
    }

    pub fn store(&self) -> &IntermediateStore {
        &self.store
    }

    pub fn solutions(&self) -> &SolutionIndex {
        &self.solutions
    }

    /// Statistics of the passes run so far.
    pub fn passes(&self) -> &[PassStatistics] {
        &self.passes
    }

    pub fn pass_limit(&self) -> usize {
        self.pass_limit
    }

    /// Consumes the engine, returning its store, index and pass statistics.
    pub fn into_parts(self) -> (IntermediateStore, SolutionIndex, Vec<PassStatistics>) {
        (self.store, self.solutions, self.passes)
    }
}

// For the ordered pair (L, R): L + R, L × R, L - R, R - L, L ÷ R, R ÷ L.
fn candidate_order<'a>(
    left: &'a Intermediate,
    right: &'a Intermediate,
) -> [(Operation, &'a Intermediate, &'a Intermediate); 6] {
    [
        (Operation::Add, left, right),
        (Operation::Multiply, left, right),
        (Operation::Subtract, left, right),
        (Operation::Subtract, right, left),
        (Operation::Divide, left, right),
        (Operation::Divide, right, left),
    ]
}

/// For each index mask, the positions of all intermediates whose masks are
/// disjoint from it, in ascending (insertion) order.
struct PartnerTable {
    partners: Vec<Vec<usize>>,
}

impl PartnerTable {
    fn build(entries: &[Intermediate]) -> Self {
        let mut buckets: Vec<Vec<usize>> = vec![Vec::new(); MASK_COUNT];
        for (idx, entry) in entries.iter().enumerate() {
            buckets[entry.used.bits() as usize].push(idx);
        }

        let mut partners: Vec<Vec<usize>> = vec![Vec::new(); MASK_COUNT];
        for mask in 1..MASK_COUNT {
            if buckets[mask].is_empty() {
                continue;
            }
            let mut list: Vec<usize> = (1..MASK_COUNT)
                .filter(|other| other & mask == 0)
                .flat_map(|other| buckets[other].iter().copied())
                .collect();
            list.sort_unstable();
            partners[mask] = list;
        }
        Self { partners }
    }

    #[inline]
    fn partners(&self, used: IndexSet) -> &[usize] {
        &self.partners[used.bits() as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(values: [i64; 6], pass_limit: usize) -> CombinationEngine {
        let numbers = SourceNumbers::new(&values).unwrap();
        CombinationEngine::new(&numbers, pass_limit)
    }

    #[test]
    fn test_seeds_sources() {
        let engine = engine([1, 2, 3, 4, 5, 100], 6);
        assert_eq!(engine.store().len(), 6);
        // Only the source inside the band registers a path
        assert_eq!(engine.solutions().paths(100).collect::<Vec<_>>(), vec!["100"]);
        assert_eq!(engine.solutions().target_count(), 1);
    }

    #[test]
    fn test_single_pass_combines_pairs() {
        let mut engine = engine([2, 3, 1, 1, 1, 1], 6);
        let stats = engine.run_pass();

        assert_eq!(stats.pass_index, 0);
        assert_eq!(stats.intermediates_visible, 6);
        // Every ordered pair of distinct sources is disjoint
        assert_eq!(stats.pairs_combined, 30);

        let used: IndexSet = [0, 1].into_iter().collect();
        let stored: Vec<&Intermediate> = engine
            .store()
            .iter()
            .filter(|i| i.used == used)
            .collect();
        let values: Vec<u32> = stored.iter().map(|i| i.value).collect();
        // 2 + 3, 2 × 3, 3 - 2 (2 - 3 and both divisions are rejected)
        assert_eq!(values, vec![5, 6, 1]);
        assert_eq!(stored[0].path, "(2 + 3)");
        assert_eq!(stored[2].path, "(3 - 2)");
    }

    #[test]
    fn test_rejects_out_of_bound_candidates() {
        let mut engine = engine([500, 2, 1, 1, 1, 1], 1);
        engine.run();

        assert!(engine.store().iter().all(|i| i.value > 0));
        // 500 × 2 = 1000 exceeds the bound, 500 + 2 does not
        assert!(!engine.store().iter().any(|i| i.value == 1000));
        assert!(engine.solutions().contains(502));
        assert!(engine.solutions().contains(250));
        assert!(engine.solutions().contains(498));
    }

    #[test]
    fn test_pass_limit_caps_passes() {
        let mut engine = engine([1, 2, 3, 4, 5, 6], 2);
        engine.run();
        assert_eq!(engine.passes().len(), 2);
        // Two passes can combine at most four sources
        assert!(engine.store().iter().all(|i| i.used.len() <= 4));
    }

    #[test]
    fn test_stops_at_fixpoint() {
        let mut engine = engine([1, 1, 1, 1, 1, 1], 6);
        engine.run();

        let last = engine.passes().last().unwrap();
        assert!(!last.made_progress());
        assert!(engine.passes().len() <= 6);
        assert!(engine.solutions().is_empty());
    }

    #[test]
    fn test_registers_duplicate_key_paths() {
        // (100 + 100) on positions {0,1} is stored first; the pair (1, 0)
        // yields the same text and the same key, and nothing new is added.
        let mut engine = engine([100, 100, 1, 1, 1, 1], 1);
        engine.run();
        assert_eq!(
            engine.solutions().paths(200).filter(|p| *p == "(100 + 100)").count(),
            1
        );
        // (100 - 1) on {0,2} and on {1,2} share text but not key
        let keyed: Vec<&Intermediate> = engine
            .store()
            .iter()
            .filter(|i| i.value == 99)
            .collect();
        assert!(keyed.len() >= 2);
    }

    #[test]
    fn test_partner_table_is_disjoint_and_ordered() {
        let mut engine = engine([1, 2, 3, 4, 5, 6], 2);
        engine.run();
        let entries = engine.store().as_slice();
        let table = PartnerTable::build(entries);

        for entry in entries.iter().take(50) {
            let partners = table.partners(entry.used);
            assert!(partners.windows(2).all(|w| w[0] < w[1]));
            assert!(partners
                .iter()
                .all(|&j| entries[j].used.is_disjoint(entry.used)));
            let expected = entries
                .iter()
                .filter(|other| other.used.is_disjoint(entry.used))
                .count();
            assert_eq!(partners.len(), expected);
        }
    }
}
