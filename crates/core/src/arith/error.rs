//! Arithmetic fault types.
//!
//! Unlike validation outcomes, these indicate a contract violation by the
//! caller (malformed input or a zero divisor) and are returned as `Err`.

use thiserror::Error;

/// Errors that can occur during exact-decimal arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArithError {
    /// The input string is not a valid decimal literal.
    #[error("Invalid numeric format: {input:?}")]
    InvalidNumericFormat {
        /// The offending input.
        input: String,
    },

    /// Division by zero.
    #[error("Division by zero")]
    DivisionByZero,
}

impl ArithError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidNumericFormat { .. } => "INVALID_NUMERIC_FORMAT",
            Self::DivisionByZero => "DIVISION_BY_ZERO",
        }
    }
}
