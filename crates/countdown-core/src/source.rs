//! Source numbers for a round.
//!
//! A round is played with exactly [`SOURCE_COUNT`] positive integers. Their
//! positions matter: two equal values at different positions are distinct
//! sources, and each position may be consumed at most once by a path.

use std::fmt;
use std::str::FromStr;

use crate::error::{CountdownError, Result};

/// Number of source numbers in a round.
pub const SOURCE_COUNT: usize = 6;

/// The validated, ordered source numbers of a round.
///
/// # Examples
///
/// ```
/// use countdown_core::SourceNumbers;
///
/// let numbers = SourceNumbers::new(&[25, 50, 3, 6, 7, 1]).unwrap();
/// assert_eq!(numbers.get(1), Some(50));
/// assert_eq!(numbers.to_string(), "[25, 50, 3, 6, 7, 1]");
///
/// assert!(SourceNumbers::new(&[0, 1, 2, 3, 4, 5]).is_err());
/// assert!(SourceNumbers::parse("1 2 3.5 4 5 6").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<i64>", into = "Vec<u32>")
)]
pub struct SourceNumbers {
    values: [u32; SOURCE_COUNT],
}

impl SourceNumbers {
    /// Validates and wraps the given integers.
    ///
    /// # Errors
    ///
    /// Returns [`CountdownError::InvalidInput`] if the count is not
    /// [`SOURCE_COUNT`] or any value is not a positive 32-bit integer.
    pub fn new(values: &[i64]) -> Result<Self> {
        if values.len() != SOURCE_COUNT {
            return Err(CountdownError::invalid_input(format!(
                "expected {} source numbers, got {}",
                SOURCE_COUNT,
                values.len()
            )));
        }

        let mut checked = [0u32; SOURCE_COUNT];
        for (idx, &value) in values.iter().enumerate() {
            checked[idx] = positive(idx, value)?;
        }
        Ok(Self { values: checked })
    }

    /// Parses source numbers from text separated by whitespace or commas.
    ///
    /// Non-integer tokens such as `3.5` are rejected as invalid input.
    pub fn parse(input: &str) -> Result<Self> {
        let tokens: Vec<&str> = input
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
            .collect();

        let mut values = Vec::with_capacity(tokens.len());
        for token in tokens {
            values.push(parse_token(token)?);
        }
        Self::new(&values)
    }

    /// Returns the value at `index`, if in range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<u32> {
        self.values.get(index).copied()
    }

    /// Returns the values in position order.
    #[inline]
    pub fn as_slice(&self) -> &[u32] {
        &self.values
    }

    /// Iterates `(index, value)` pairs in position order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.values.iter().copied().enumerate()
    }

    /// Returns the number of sources (always [`SOURCE_COUNT`]).
    #[inline]
    pub const fn len(&self) -> usize {
        SOURCE_COUNT
    }

    /// Always false; present for API symmetry with `len`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        false
    }
}

fn positive(idx: usize, value: i64) -> Result<u32> {
    if value <= 0 {
        return Err(CountdownError::invalid_input(format!(
            "source number {} at position {} is not positive",
            value, idx
        )));
    }
    u32::try_from(value).map_err(|_| {
        CountdownError::invalid_input(format!(
            "source number {} at position {} is too large",
            value, idx
        ))
    })
}

fn parse_token(token: &str) -> Result<i64> {
    if let Ok(value) = token.parse::<i64>() {
        return Ok(value);
    }
    match token.parse::<f64>() {
        Ok(value) if value.is_finite() && value.fract() == 0.0 => Ok(value as i64),
        Ok(_) => Err(CountdownError::invalid_input(format!(
            "source number {token} is not an integer"
        ))),
        Err(_) => Err(CountdownError::invalid_input(format!(
            "source number {token:?} is not a number"
        ))),
    }
}

impl TryFrom<Vec<i64>> for SourceNumbers {
    type Error = CountdownError;

    fn try_from(values: Vec<i64>) -> Result<Self> {
        Self::new(&values)
    }
}

impl TryFrom<[u32; SOURCE_COUNT]> for SourceNumbers {
    type Error = CountdownError;

    fn try_from(values: [u32; SOURCE_COUNT]) -> Result<Self> {
        let widened: Vec<i64> = values.iter().map(|&v| i64::from(v)).collect();
        Self::new(&widened)
    }
}

impl From<SourceNumbers> for Vec<u32> {
    fn from(numbers: SourceNumbers) -> Self {
        numbers.values.to_vec()
    }
}

impl FromStr for SourceNumbers {
    type Err = CountdownError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for SourceNumbers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, value) in self.values.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}
