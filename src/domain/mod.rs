// ============================================================================
// Domain Models Module
// Contains constraint configuration and validation result types
// ============================================================================

pub mod config;
pub mod validation;

pub use config::{ConfigError, DecimalMatcherConfig, DigitConstraints, DEFAULT_MAX_DIGITS};
pub use validation::{ErrorCode, ValidationError, ValidationResult};
