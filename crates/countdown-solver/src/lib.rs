//! Countdown Solver - exhaustive solution search for the numbers round
//!
//! Given six source numbers, [`solve`] finds every target in the band
//! 100..=999 reachable with `+ - × ÷`, using each source at most once, and
//! keeps every distinct path text that reaches it. The returned
//! [`SolverHandle`] answers per-target queries and produces the
//! [`FullAnalysis`] that [`RoundGenerator`] uses to choose a fair target.
//!
//! # Example
//!
//! ```
//! use countdown_core::SourceNumbers;
//! use countdown_solver::solve;
//!
//! let handle = solve(SourceNumbers::new(&[75, 50, 2, 3, 8, 7]).unwrap());
//! let analysis = handle.analyze(812).unwrap();
//!
//! assert!(analysis.number_of_paths >= 1);
//! assert!(handle.paths_for(812).contains(&analysis.easiest_path.as_str()));
//! ```

pub mod analysis;
pub mod engine;
pub mod handle;
pub mod index;
pub mod round;
pub mod statistics;
pub mod store;

pub use analysis::{median, AnalysisStatistics, FullAnalysis, TargetAnalysis, TargetRange};
pub use engine::CombinationEngine;
pub use handle::{solve, solve_with_config, SolverHandle};
pub use index::SolutionIndex;
pub use round::{Round, RoundGenerator};
pub use statistics::{PassStatistics, SolveStatistics};
pub use store::{Intermediate, IntermediateStore};
