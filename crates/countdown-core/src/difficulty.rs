//! Difficulty heuristic for path text.

use crate::operation::Operation;

/// Weight of one occurrence of an operation in a path.
#[inline]
pub const fn operation_weight(op: Operation) -> u32 {
    match op {
        Operation::Add => 1,
        Operation::Subtract => 2,
        Operation::Multiply => 3,
        Operation::Divide => 4,
    }
}

/// Scores how hard a path is to find. Larger is harder.
///
/// The score is the weighted count of operator symbols plus one point per
/// opening parenthesis. Only the path symbols `+ - × ÷` (and `−`) count.
///
/// # Examples
///
/// ```
/// use countdown_core::difficulty;
///
/// assert_eq!(difficulty("7"), 0);
/// assert_eq!(difficulty("(3 + 4)"), 2);
/// assert_eq!(difficulty("((3 × 4) + 5)"), 6);
/// ```
pub fn difficulty(path: &str) -> u32 {
    path.chars()
        .map(|c| match c {
            '+' => operation_weight(Operation::Add),
            '-' | '−' => operation_weight(Operation::Subtract),
            '×' => operation_weight(Operation::Multiply),
            '÷' => operation_weight(Operation::Divide),
            '(' => 1,
            _ => 0,
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights() {
        assert_eq!(difficulty("(1 + 2)"), 1 + 1);
        assert_eq!(difficulty("(1 - 2)"), 2 + 1);
        assert_eq!(difficulty("(1 × 2)"), 3 + 1);
        assert_eq!(difficulty("(1 ÷ 2)"), 4 + 1);
    }

    #[test]
    fn test_nesting_counts_parentheses() {
        // 4 operators: +1 -2 ×3 ÷4, 4 opening parentheses
        assert_eq!(difficulty("(((1 + 2) - 3) × (8 ÷ 4))"), 10 + 4);
    }

    #[test]
    fn test_typographic_minus() {
        assert_eq!(difficulty("(9 − 2)"), difficulty("(9 - 2)"));
    }

    #[test]
    fn test_ignores_ascii_calculator_symbols() {
        assert_eq!(difficulty("(3 * 4)"), 1);
    }
}
