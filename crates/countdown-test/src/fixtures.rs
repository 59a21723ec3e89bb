//! Source-number fixtures.

use countdown_core::SourceNumbers;
use proptest::prelude::*;

/// 1 through 6: reaches 100 but few large targets.
pub const ASCENDING: [i64; 6] = [1, 2, 3, 4, 5, 6];

/// Six equal large numbers: many index pairs print the same path.
pub const ALL_HUNDREDS: [i64; 6] = [100, 100, 100, 100, 100, 100];

/// Six ones: nothing in the target band is reachable.
pub const ALL_ONES: [i64; 6] = [1, 1, 1, 1, 1, 1];

/// A typical round with two large numbers.
pub const TYPICAL_ROUND: [i64; 6] = [75, 50, 2, 3, 8, 7];

/// Small numbers whose reachable band is sparse.
pub const SPARSE: [i64; 6] = [1, 1, 2, 2, 3, 3];

/// Builds validated source numbers.
///
/// # Panics
///
/// Panics if `values` is not a valid set of source numbers.
pub fn numbers(values: [i64; 6]) -> SourceNumbers {
    SourceNumbers::new(&values)
        .unwrap_or_else(|err| panic!("invalid fixture {:?}: {}", values, err))
}

/// Strategy producing round-shaped inputs: four small numbers from 1..=9
/// and two large numbers from {10, 25, 50, 75, 100}.
///
/// Kept to small magnitudes so each solve stays quick in debug builds.
pub fn round_numbers() -> impl Strategy<Value = SourceNumbers> {
    (
        prop::array::uniform4(1i64..=9),
        prop::sample::subsequence(vec![10i64, 25, 50, 75, 100], 2),
    )
        .prop_map(|(small, large)| {
            let mut values = small.to_vec();
            values.extend(large);
            SourceNumbers::new(&values).expect("round numbers are positive")
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures_are_valid() {
        for values in [ASCENDING, ALL_HUNDREDS, ALL_ONES, TYPICAL_ROUND, SPARSE] {
            assert_eq!(numbers(values).len(), 6);
        }
    }

    #[test]
    #[should_panic(expected = "invalid fixture")]
    fn test_invalid_fixture_panics() {
        numbers([0, 1, 2, 3, 4, 5]);
    }
}
