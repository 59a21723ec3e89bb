//! The four arithmetic operations of the numbers round.

use std::fmt;

/// A binary arithmetic operation.
///
/// Operations work on non-negative integers. Subtraction never goes below
/// zero and division only succeeds when it is exact.
///
/// # Examples
///
/// ```
/// use countdown_core::Operation;
///
/// assert_eq!(Operation::Multiply.apply(25, 4), Some(100));
/// assert_eq!(Operation::Divide.apply(10, 4), None);
/// assert_eq!(Operation::Subtract.apply(3, 7), None);
/// assert_eq!(Operation::Divide.symbol(), '÷');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Returns the symbol used in path text.
    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Subtract => '-',
            Operation::Multiply => '×',
            Operation::Divide => '÷',
        }
    }

    /// Maps a symbol to its operation.
    ///
    /// Accepts the path symbols plus the typographic minus `−` and the
    /// ASCII calculator forms `*` and `/`.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Operation::Add),
            '-' | '−' => Some(Operation::Subtract),
            '×' | '*' => Some(Operation::Multiply),
            '÷' | '/' => Some(Operation::Divide),
            _ => None,
        }
    }

    /// Applies the operation, returning `None` when the result is not a
    /// non-negative integer or does not fit in `u64`.
    pub fn apply(self, left: u64, right: u64) -> Option<u64> {
        match self {
            Operation::Add => left.checked_add(right),
            Operation::Subtract => left.checked_sub(right),
            Operation::Multiply => left.checked_mul(right),
            Operation::Divide => {
                if right == 0 || left % right != 0 {
                    None
                } else {
                    Some(left / right)
                }
            }
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
