// ============================================================================
// Numeric Module
// Arbitrary-precision decimal literals and digit counting
// ============================================================================
//
// This module provides:
// - ParsedDecimal: normalised decimal literal with precision/decimal-place counts
// - ParseDecimalError: Error types for parsing and conversion
//
// Design principles:
// - No floating-point operations
// - Parsing returns Result (no panics)
// - No digit-count ceiling; rust_decimal only at conversion boundaries

mod errors;
mod parsed_decimal;

pub use errors::{NumericResult, ParseDecimalError};
pub use parsed_decimal::{ParsedDecimal, MAX_EXPONENT};
