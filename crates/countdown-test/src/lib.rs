//! Shared test fixtures for Countdown crates.
//!
//! This crate provides source-number fixtures and path checks for testing.
//! It does NOT depend on `countdown-solver` so the solver can use it as a
//! dev-dependency.
//!
//! - [`fixtures`] - Named source-number sets and proptest strategies
//! - [`paths`] - Checks that a path evaluates to its target without reusing
//!   a source number
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! countdown-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use countdown_test::fixtures::{numbers, ASCENDING};
//! use countdown_test::paths::assert_path_reaches;
//! ```

pub mod fixtures;
pub mod paths;

pub use fixtures::{numbers, round_numbers, ALL_HUNDREDS, ALL_ONES, ASCENDING, SPARSE, TYPICAL_ROUND};
pub use paths::{assert_path_reaches, check_path};
