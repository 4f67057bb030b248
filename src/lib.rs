// ============================================================================
// Decimal Matcher Library
// Arbitrary-precision decimal string validation with digit constraints
// ============================================================================

//! # Decimal Matcher
//!
//! Validates that a string value is a decimal number within configurable
//! digit limits.
//!
//! ## Features
//!
//! - **Arbitrary-precision parsing**: no ceiling on the number of digits
//! - **Three constraint policies**: default (11 digits), max digits, or max
//!   digits plus max decimal places
//! - **Stable error codes**: `doubleNumber.e001` to `doubleNumber.e003`
//! - **Pluggable error sinks** for collecting results
//! - **`rust_decimal` interop** at API boundaries
//!
//! ## Example
//!
//! ```rust
//! use decimal_matcher::prelude::*;
//!
//! // Up to 5 digits in total, at most 2 after the separator
//! let matcher = DecimalNumberMatcher::from_params(&[5, 2]).unwrap();
//!
//! assert!(matcher.match_input(Some("123.45")).is_valid());
//! assert!(matcher.match_input(None).is_valid());
//!
//! let result = matcher.match_input(Some("123456.789"));
//! assert!(result.has_error(ErrorCode::TooManyDigits));
//! assert!(result.has_error(ErrorCode::TooManyDecimalPlaces));
//!
//! let result = matcher.match_input(Some("12,5"));
//! assert_eq!(result.codes().collect::<Vec<_>>(), vec!["doubleNumber.e001"]);
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        ConfigError, DecimalMatcherConfig, DigitConstraints, ErrorCode, ValidationError,
        ValidationResult, DEFAULT_MAX_DIGITS,
    };
    pub use crate::engine::{create_from_config, DecimalMatcherBuilder, DecimalNumberMatcher};
    pub use crate::interfaces::{ErrorSink, LoggingErrorSink, Matcher, NoOpErrorSink};
    pub use crate::numeric::{ParseDecimalError, ParsedDecimal};
}
