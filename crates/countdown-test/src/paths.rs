//! Path validity checks.
//!
//! A path is valid for a target when it parses, evaluates exactly to the
//! target, and its literals can be matched to distinct source positions.

use countdown_core::{Expr, SourceNumbers};

/// Checks `path` against `target` and `sources`, describing any failure.
pub fn check_path(path: &str, sources: &SourceNumbers, target: u32) -> Result<(), String> {
    let expr = Expr::parse(path).map_err(|err| format!("{path:?} does not parse: {err}"))?;
    let value = expr
        .evaluate()
        .map_err(|err| format!("{path:?} does not evaluate: {err}"))?;
    if value != u64::from(target) {
        return Err(format!("{path:?} evaluates to {value}, expected {target}"));
    }
    if !expr.uses_sources(sources) {
        return Err(format!("{path:?} reuses or invents a source number from {sources}"));
    }
    if expr.to_string() != path {
        return Err(format!("{path:?} is not in canonical form ({expr})"));
    }
    Ok(())
}

/// Asserts that `path` is a valid path to `target` from `sources`.
///
/// # Panics
///
/// Panics with the reason if the path is invalid.
#[track_caller]
pub fn assert_path_reaches(path: &str, sources: &SourceNumbers, target: u32) {
    if let Err(reason) = check_path(path, sources, target) {
        panic!("{}", reason);
    }
}
