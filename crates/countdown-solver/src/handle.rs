//! Solver entry points and the handle over a finished search.

use std::time::Instant;

use countdown_config::SolverConfig;
use countdown_core::SourceNumbers;
use tracing::info;

use crate::analysis::{FullAnalysis, TargetAnalysis};
use crate::engine::CombinationEngine;
use crate::index::SolutionIndex;
use crate::statistics::SolveStatistics;
use crate::store::{Intermediate, IntermediateStore};

/// Searches every target reachable from `numbers` with the default
/// configuration.
///
/// # Examples
///
/// ```
/// use countdown_core::SourceNumbers;
/// use countdown_solver::solve;
///
/// let numbers = SourceNumbers::new(&[100, 100, 100, 100, 100, 100]).unwrap();
/// let handle = solve(numbers);
///
/// assert!(handle.list_targets().contains(&200));
/// assert!(handle.paths_for(200).contains(&"(100 + 100)"));
/// ```
pub fn solve(numbers: SourceNumbers) -> SolverHandle {
    solve_with_config(numbers, &SolverConfig::default())
}

/// Searches every target reachable from `numbers`.
///
/// Only `termination.pass_limit` is read from `config`.
pub fn solve_with_config(numbers: SourceNumbers, config: &SolverConfig) -> SolverHandle {
    let pass_limit = config.pass_limit(numbers.len());
    let started = Instant::now();

    info!(
        event = "solve_start",
        numbers = %numbers,
        pass_limit = pass_limit as u64,
    );

    let mut engine = CombinationEngine::new(&numbers, pass_limit);
    engine.run();
    let (store, solutions, passes) = engine.into_parts();

    let statistics = SolveStatistics {
        duration: started.elapsed(),
        pass_limit,
        passes,
        intermediate_count: store.len(),
        target_count: solutions.target_count(),
        path_count: solutions.path_count(),
    };

    info!(
        event = "solve_end",
        passes = statistics.pass_count() as u64,
        pairs = statistics.total_pairs_combined(),
        intermediate_count = statistics.intermediate_count as u64,
        target_count = statistics.target_count as u64,
        path_count = statistics.path_count as u64,
        duration_ms = statistics.duration.as_millis() as u64,
    );

    SolverHandle {
        numbers,
        store,
        solutions,
        statistics,
    }
}

/// The fully materialized result of one search.
#[derive(Debug)]
pub struct SolverHandle {
    numbers: SourceNumbers,
    store: IntermediateStore,
    solutions: SolutionIndex,
    statistics: SolveStatistics,
}

impl SolverHandle {
    /// The source numbers searched.
    pub fn numbers(&self) -> &SourceNumbers {
        &self.numbers
    }

    /// Reachable targets in ascending order.
    pub fn list_targets(&self) -> Vec<u32> {
        self.solutions.targets().collect()
    }

    /// Distinct paths reaching `target`, in discovery order. Empty if the
    /// target is unreachable.
    pub fn paths_for(&self, target: u32) -> Vec<&str> {
        self.solutions.paths(target).collect()
    }

    /// Returns true if at least one path reaches `target`.
    pub fn is_reachable(&self, target: u32) -> bool {
        self.solutions.contains(target)
    }

    /// Analyzes the paths reaching `target`. `None` if there are none.
    pub fn analyze(&self, target: u32) -> Option<TargetAnalysis> {
        TargetAnalysis::from_paths(target, self.solutions.paths(target))
    }

    /// Analyzes every reachable target.
    pub fn full_analysis(&self) -> FullAnalysis {
        FullAnalysis::from_index(&self.solutions)
    }

    /// All stored intermediates, in discovery order.
    pub fn intermediates(&self) -> &[Intermediate] {
        self.store.as_slice()
    }

    pub fn solutions(&self) -> &SolutionIndex {
        &self.solutions
    }

    pub fn statistics(&self) -> &SolveStatistics {
        &self.statistics
    }
}
