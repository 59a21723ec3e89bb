//! Countdown Core - Core types for the numbers-round solver
//!
//! This crate provides the fundamental building blocks shared by the solver,
//! configuration and front-end crates:
//! - Validated source numbers and the index sets that track their use
//! - The four arithmetic operations and their exactness rules
//! - The path expression grammar (parse, evaluate, print)
//! - The path difficulty heuristic

pub mod difficulty;
pub mod error;
pub mod expression;
pub mod index_set;
pub mod operation;
pub mod source;

pub use difficulty::difficulty;
pub use error::{CountdownError, Result};
pub use expression::{Expr, ExpressionError};
pub use index_set::IndexSet;
pub use operation::Operation;
pub use source::{SourceNumbers, SOURCE_COUNT};

/// Smallest value that may be published as a round target.
pub const TARGET_MIN: u32 = 100;

/// Largest value that may be published as a round target.
///
/// Also the pruning bound for intermediates: combinations above it are
/// discarded during search.
pub const TARGET_MAX: u32 = 999;

/// Returns true if `value` lies in the inclusive target band.
#[inline]
pub const fn in_target_band(value: u32) -> bool {
    value >= TARGET_MIN && value <= TARGET_MAX
}
