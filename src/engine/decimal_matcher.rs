// ============================================================================
// Decimal Number Matcher
// Digit-count constraint checks over decimal string values
// ============================================================================

use crate::domain::{ConfigError, DigitConstraints, ErrorCode, ValidationResult};
use crate::interfaces::{ErrorSink, Matcher};
use crate::numeric::ParsedDecimal;
use rust_decimal::Decimal;

/// Validates that a string value is a decimal number (or absent) within the
/// configured digit limits.
///
/// `.` is the only decimal separator. Absent values always pass. A value
/// that fails to parse gets `doubleNumber.e001` and no further checks; a
/// parsed value is checked against the [`DigitConstraints`]:
/// - total digits above the limit: `doubleNumber.e002`
/// - decimal places above the limit (two-parameter policy only):
///   `doubleNumber.e003`
///
/// The matcher holds no per-call state and may be shared across threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecimalNumberMatcher {
    constraints: DigitConstraints,

    /// Field name for log context
    field: Option<String>,
}

impl DecimalNumberMatcher {
    pub fn new(constraints: DigitConstraints) -> Self {
        Self {
            constraints,
            field: None,
        }
    }

    /// Create from 0, 1 or 2 positional parameters
    ///
    /// # Errors
    /// Returns `TooManyParameters` for more than two parameters.
    pub fn from_params(params: &[u32]) -> Result<Self, ConfigError> {
        DigitConstraints::from_params(params).map(Self::new)
    }

    /// Attach a field name used in log events
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn constraints(&self) -> &DigitConstraints {
        &self.constraints
    }

    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// Match a value into a fresh result
    pub fn match_input(&self, input: Option<&str>) -> ValidationResult {
        let mut result = ValidationResult::new();
        self.match_into(input, &mut result);
        result
    }

    /// Match a value, appending any errors to `sink`
    pub fn match_into<S: ErrorSink + ?Sized>(&self, input: Option<&str>, sink: &mut S) {
        let Some(input) = input else {
            tracing::trace!(field = self.field(), "Absent value accepted");
            return;
        };

        match ParsedDecimal::parse(input) {
            Ok(number) => self.check(&number, sink),
            Err(error) => {
                tracing::debug!(
                    field = self.field(),
                    %error,
                    "Value is not a decimal number"
                );
                sink.add_error_code(ErrorCode::NotADecimal);
            },
        }
    }

    /// Apply the constraint checks to an already typed decimal
    pub fn match_decimal(&self, value: &Decimal) -> ValidationResult {
        let mut result = ValidationResult::new();
        self.check(&ParsedDecimal::from(value), &mut result);
        result
    }

    /// Constraint step: check digit and decimal place counts of a parsed value
    pub fn check<S: ErrorSink + ?Sized>(&self, number: &ParsedDecimal, sink: &mut S) {
        let precision = number.precision();
        let max_digits = self.constraints.max_digits();
        let mut valid = true;

        if precision > u64::from(max_digits) {
            tracing::debug!(
                field = self.field(),
                precision,
                max_digits,
                "Value exceeded maximum number of digits"
            );
            sink.add_error_code(ErrorCode::TooManyDigits);
            valid = false;
        }

        if let Some(max_decimal_places) = self.constraints.max_decimal_places() {
            let decimal_places = number.decimal_places();
            if decimal_places > u64::from(max_decimal_places) {
                tracing::debug!(
                    field = self.field(),
                    decimal_places,
                    max_decimal_places,
                    "Value exceeded maximum number of decimal places"
                );
                sink.add_error_code(ErrorCode::TooManyDecimalPlaces);
                valid = false;
            }
        }

        if valid {
            tracing::trace!(field = self.field(), %number, "Decimal value accepted");
        }
    }
}

impl Matcher for DecimalNumberMatcher {
    fn match_into(&self, input: Option<&str>, sink: &mut dyn ErrorSink) {
        DecimalNumberMatcher::match_into(self, input, sink);
    }

    fn name(&self) -> &str {
        "DecimalNumber"
    }
}
