//! Error types for Countdown

use thiserror::Error;

/// Main error type for Countdown operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CountdownError {
    /// Source numbers rejected before the search starts
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A path or player expression could not be parsed or evaluated
    #[error("Expression error: {0}")]
    Expression(#[from] crate::expression::ExpressionError),
}

impl CountdownError {
    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        CountdownError::InvalidInput(message.into())
    }
}

/// Result type alias for Countdown operations
pub type Result<T> = std::result::Result<T, CountdownError>;
