// ============================================================================
// Numeric Errors
// Error types for parsing candidate decimal values
// ============================================================================

use std::fmt;

/// Errors that can occur while parsing a candidate value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberError {
    /// Input string is empty
    Empty,
    /// Input is not a decimal number in the accepted notation
    InvalidSyntax,
}

impl fmt::Display for NumberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberError::Empty => write!(f, "invalid input: empty value"),
            NumberError::InvalidSyntax => {
                write!(f, "invalid input: not a decimal number")
            },
        }
    }
}

impl std::error::Error for NumberError {}

/// Result type alias for numeric parsing
pub type NumberResult<T> = Result<T, NumberError>;
