//! Recursive-descent parser for path expressions.

use std::iter::Peekable;
use std::str::CharIndices;

use super::{Expr, ExpressionError};
use crate::operation::Operation;

/// Deepest parenthesis nesting accepted. Six sources need at most five.
pub const MAX_DEPTH: usize = 64;

pub(super) struct Parser<'a> {
    input: &'a str,
    chars: Peekable<CharIndices<'a>>,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub(super) fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
            depth: 0,
        }
    }

    pub(super) fn parse(mut self) -> Result<Expr, ExpressionError> {
        if self.input.trim().is_empty() {
            return Err(ExpressionError::Empty);
        }
        let expr = self.expr()?;
        self.skip_whitespace();
        match self.chars.peek() {
            Some(&(offset, _)) => Err(ExpressionError::TrailingInput { offset }),
            None => Ok(expr),
        }
    }

    fn expr(&mut self) -> Result<Expr, ExpressionError> {
        self.skip_whitespace();
        match self.chars.peek().copied() {
            Some((offset, '(')) => {
                if self.depth == MAX_DEPTH {
                    return Err(ExpressionError::TooDeep { offset });
                }
                self.chars.next();
                self.depth += 1;
                let left = self.expr()?;
                let op = self.operation()?;
                let right = self.expr()?;
                self.expect_close()?;
                self.depth -= 1;
                Ok(Expr::binary(op, left, right))
            }
            Some((offset, c)) if c.is_ascii_digit() => self.number(offset),
            Some((offset, found)) => Err(ExpressionError::UnexpectedChar { found, offset }),
            None => Err(ExpressionError::UnexpectedEnd {
                expected: "a number or '('",
            }),
        }
    }

    fn number(&mut self, start: usize) -> Result<Expr, ExpressionError> {
        let mut end = start;
        while let Some(&(offset, c)) = self.chars.peek() {
            if !c.is_ascii_digit() {
                break;
            }
            end = offset + c.len_utf8();
            self.chars.next();
        }
        self.input[start..end]
            .parse::<u32>()
            .map(Expr::Number)
            .map_err(|_| ExpressionError::NumberTooLarge { offset: start })
    }

    fn operation(&mut self) -> Result<Operation, ExpressionError> {
        self.skip_whitespace();
        match self.chars.next() {
            Some((offset, c)) => Operation::from_symbol(c).ok_or(ExpressionError::Expected {
                expected: "an operator",
                offset,
            }),
            None => Err(ExpressionError::UnexpectedEnd {
                expected: "an operator",
            }),
        }
    }

    fn expect_close(&mut self) -> Result<(), ExpressionError> {
        self.skip_whitespace();
        match self.chars.next() {
            Some((_, ')')) => Ok(()),
            Some((offset, _)) => Err(ExpressionError::Expected {
                expected: "')'",
                offset,
            }),
            None => Err(ExpressionError::UnexpectedEnd { expected: "')'" }),
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(&(_, c)) = self.chars.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.chars.next();
        }
    }
}
