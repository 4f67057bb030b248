// ============================================================================
// Validation Result Domain Model
// Error codes and the per-call error collector
// ============================================================================

use smallvec::SmallVec;
use std::borrow::Cow;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Error Codes
// ============================================================================

/// Stable error codes emitted by the decimal matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ErrorCode {
    /// Input is not a decimal literal
    NotADecimal,
    /// Total digit count above the maximum
    TooManyDigits,
    /// Decimal place count above the maximum
    TooManyDecimalPlaces,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 3] = [
        ErrorCode::NotADecimal,
        ErrorCode::TooManyDigits,
        ErrorCode::TooManyDecimalPlaces,
    ];

    pub const fn code(self) -> &'static str {
        match self {
            ErrorCode::NotADecimal => "doubleNumber.e001",
            ErrorCode::TooManyDigits => "doubleNumber.e002",
            ErrorCode::TooManyDecimalPlaces => "doubleNumber.e003",
        }
    }

    /// Default English message
    pub const fn message(self) -> &'static str {
        match self {
            ErrorCode::NotADecimal => "The value is not a valid decimal number.",
            ErrorCode::TooManyDigits => "The value exceeded maximum number of digits.",
            ErrorCode::TooManyDecimalPlaces => {
                "The value exceeded maximum number of decimal places."
            },
        }
    }

    /// Look up a code by its string form.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.code() == code)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ============================================================================
// Validation Error
// ============================================================================

/// A single (code, message) entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ValidationError {
    pub code: Cow<'static, str>,
    pub message: Cow<'static, str>,
}

impl ValidationError {
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// The known error code, if this entry carries one.
    pub fn error_code(&self) -> Option<ErrorCode> {
        ErrorCode::from_code(&self.code)
    }
}

impl From<ErrorCode> for ValidationError {
    fn from(code: ErrorCode) -> Self {
        Self::new(code.code(), code.message())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

// ============================================================================
// Validation Result
// ============================================================================

/// Accumulates validation errors for one match call.
///
/// Inline storage holds two entries, the most a single decimal match emits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ValidationResult {
    errors: SmallVec<[ValidationError; 2]>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an error entry.
    pub fn push(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// True when no errors were recorded.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Error codes in insertion order.
    pub fn codes(&self) -> impl Iterator<Item = &str> + '_ {
        self.errors.iter().map(|e| e.code.as_ref())
    }

    pub fn has_error(&self, code: ErrorCode) -> bool {
        self.codes().any(|c| c == code.code())
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors.into_vec()
    }
}

impl IntoIterator for ValidationResult {
    type Item = ValidationError;
    type IntoIter = smallvec::IntoIter<[ValidationError; 2]>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationResult {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
