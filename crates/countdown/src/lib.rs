//! Countdown - a numbers-round solver in Rust
//!
//! Hand over six numbers, get back every reachable target in 100..=999 with
//! all the ways to reach it.
//!
//! # Example
//!
//! ```rust
//! use countdown::prelude::*;
//!
//! let numbers: SourceNumbers = "1 2 3 4 5 6".parse().unwrap();
//! let handle = solve(numbers);
//!
//! let analysis = handle.analyze(100).unwrap();
//! assert_eq!(analysis.number_of_paths, handle.paths_for(100).len());
//! assert!(analysis.min_difficulty <= analysis.max_difficulty);
//! ```

// Domain types
pub use countdown_core::{
    difficulty, in_target_band, CountdownError, Expr, ExpressionError, IndexSet, Operation,
    Result, SourceNumbers, SOURCE_COUNT, TARGET_MAX, TARGET_MIN,
};

// Search and analysis
pub use countdown_solver::{
    median, solve, solve_with_config, AnalysisStatistics, FullAnalysis, PassStatistics, Round,
    RoundGenerator, SolveStatistics, SolverHandle, TargetAnalysis, TargetRange,
};

// Configuration
pub use countdown_config::{ConfigError, RoundConfig, SolverConfig, TerminationConfig};

/// Colored console output. Call [`console::init`] once at startup.
#[cfg(feature = "console")]
pub mod console {
    pub use countdown_console::{init, CountdownConsoleLayer};
}

/// Lower-level building blocks of the search, for callers driving passes
/// themselves.
pub mod engine {
    pub use countdown_solver::{CombinationEngine, Intermediate, IntermediateStore, SolutionIndex};
}

pub mod prelude {
    pub use super::{solve, solve_with_config, FullAnalysis, SolverHandle, TargetAnalysis};
    pub use super::{Expr, SourceNumbers};
    pub use super::{RoundGenerator, SolverConfig};
}
