//! Path expressions.
//!
//! Paths are fully parenthesized infix expressions such as `((3 × 4) + 5)`.
//! This module parses that grammar, evaluates it with the round's exact
//! integer rules, and prints it back in canonical form. Any evaluator that
//! checks player answers against solver paths must accept this grammar.
//!
//! ```text
//! expr := number | "(" expr op expr ")"
//! op   := "+" | "-" | "−" | "×" | "*" | "÷" | "/"
//! ```

mod parser;

pub use parser::MAX_DEPTH;

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

use crate::operation::Operation;
use crate::source::SourceNumbers;

/// Errors from parsing or evaluating an expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpressionError {
    #[error("empty expression")]
    Empty,

    #[error("unexpected character {found:?} at offset {offset}")]
    UnexpectedChar { found: char, offset: usize },

    #[error("expected {expected} at offset {offset}")]
    Expected {
        expected: &'static str,
        offset: usize,
    },

    #[error("unexpected end of expression, expected {expected}")]
    UnexpectedEnd { expected: &'static str },

    #[error("trailing input at offset {offset}")]
    TrailingInput { offset: usize },

    #[error("parentheses nested deeper than {} at offset {offset}", parser::MAX_DEPTH)]
    TooDeep { offset: usize },

    #[error("number at offset {offset} is too large")]
    NumberTooLarge { offset: usize },

    #[error("division by zero")]
    DivisionByZero,

    #[error("{left} ÷ {right} is not exact")]
    InexactDivision { left: u64, right: u64 },

    #[error("{left} - {right} is negative")]
    NegativeResult { left: u64, right: u64 },

    #[error("arithmetic overflow")]
    Overflow,
}

/// A parsed path expression.
///
/// # Examples
///
/// ```
/// use countdown_core::{Expr, SourceNumbers};
///
/// let expr = Expr::parse("((3 × 4) + 5)").unwrap();
/// assert_eq!(expr.evaluate(), Ok(17));
/// assert_eq!(expr.literals(), vec![3, 4, 5]);
/// assert_eq!(expr.to_string(), "((3 × 4) + 5)");
///
/// let sources = SourceNumbers::new(&[5, 4, 3, 1, 1, 1]).unwrap();
/// assert!(expr.uses_sources(&sources));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Number(u32),
    Binary {
        op: Operation,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

impl Expr {
    /// Parses expression text.
    pub fn parse(text: &str) -> Result<Expr, ExpressionError> {
        parser::Parser::new(text).parse()
    }

    /// Builds a binary node.
    pub fn binary(op: Operation, left: Expr, right: Expr) -> Expr {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Evaluates the expression.
    ///
    /// Subtraction must stay non-negative and division must be exact.
    pub fn evaluate(&self) -> Result<u64, ExpressionError> {
        match self {
            Expr::Number(value) => Ok(u64::from(*value)),
            Expr::Binary { op, left, right } => {
                let left = left.evaluate()?;
                let right = right.evaluate()?;
                match op {
                    Operation::Subtract if right > left => {
                        Err(ExpressionError::NegativeResult { left, right })
                    }
                    Operation::Divide if right == 0 => Err(ExpressionError::DivisionByZero),
                    Operation::Divide if left % right != 0 => {
                        Err(ExpressionError::InexactDivision { left, right })
                    }
                    _ => op.apply(left, right).ok_or(ExpressionError::Overflow),
                }
            }
        }
    }

    /// Returns the literal numbers in left-to-right order.
    pub fn literals(&self) -> Vec<u32> {
        let mut out = Vec::new();
        self.collect_literals(&mut out);
        out
    }

    fn collect_literals(&self, out: &mut Vec<u32>) {
        match self {
            Expr::Number(value) => out.push(*value),
            Expr::Binary { left, right, .. } => {
                left.collect_literals(out);
                right.collect_literals(out);
            }
        }
    }

    /// Number of binary operations in the expression.
    pub fn operation_count(&self) -> usize {
        match self {
            Expr::Number(_) => 0,
            Expr::Binary { left, right, .. } => 1 + left.operation_count() + right.operation_count(),
        }
    }

    /// Returns true if every literal can be matched to a distinct source
    /// position, so no source number is used twice.
    pub fn uses_sources(&self, sources: &SourceNumbers) -> bool {
        let mut available: HashMap<u32, usize> = HashMap::new();
        for &value in sources.as_slice() {
            *available.entry(value).or_insert(0) += 1;
        }
        self.literals().into_iter().all(|literal| {
            match available.get_mut(&literal) {
                Some(count) if *count > 0 => {
                    *count -= 1;
                    true
                }
                _ => false,
            }
        })
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(value) => write!(f, "{}", value),
            Expr::Binary { op, left, right } => write!(f, "({} {} {})", left, op, right),
        }
    }
}

impl std::str::FromStr for Expr {
    type Err = ExpressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Expr::parse(s)
    }
}
