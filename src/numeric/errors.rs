// ============================================================================
// Numeric Errors
// Error types for decimal literal parsing and conversion
// ============================================================================

use std::fmt;

/// Errors that can occur while parsing or converting a decimal literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseDecimalError {
    /// Input string is empty
    Empty,
    /// Character at the given byte offset is not part of a decimal literal
    InvalidCharacter { position: usize },
    /// More than one decimal separator
    MultipleSeparators,
    /// Rejected by the decimal parser (e.g. "-", ".", "e5")
    Malformed,
    /// Exponent marker not followed by digits
    InvalidExponent,
    /// Exponent magnitude beyond the supported range
    ExponentOutOfRange,
    /// Value does not fit the target fixed-size decimal type
    Overflow,
}

impl fmt::Display for ParseDecimalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseDecimalError::Empty => write!(f, "invalid input: empty string"),
            ParseDecimalError::InvalidCharacter { position } => {
                write!(f, "invalid input: unexpected character at offset {}", position)
            },
            ParseDecimalError::MultipleSeparators => {
                write!(f, "invalid input: more than one decimal separator")
            },
            ParseDecimalError::Malformed => write!(f, "invalid input: not a decimal literal"),
            ParseDecimalError::InvalidExponent => {
                write!(f, "invalid input: exponent has no digits")
            },
            ParseDecimalError::ExponentOutOfRange => {
                write!(f, "invalid input: exponent out of range")
            },
            ParseDecimalError::Overflow => write!(
                f,
                "overflow: value does not fit a 96-bit decimal"
            ),
        }
    }
}

impl std::error::Error for ParseDecimalError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, ParseDecimalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ParseDecimalError::Empty.to_string(),
            "invalid input: empty string"
        );
        assert_eq!(
            ParseDecimalError::InvalidCharacter { position: 3 }.to_string(),
            "invalid input: unexpected character at offset 3"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(ParseDecimalError::Overflow, ParseDecimalError::Overflow);
        assert_ne!(
            ParseDecimalError::Malformed,
            ParseDecimalError::InvalidExponent
        );
    }
}
