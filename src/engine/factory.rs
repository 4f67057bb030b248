// ============================================================================
// Matcher Factory
// Creates decimal matchers with proper configuration
// ============================================================================

use crate::domain::config::{ConfigError, DecimalMatcherConfig, DigitConstraints};
use crate::engine::DecimalNumberMatcher;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a decimal matcher from configuration
///
/// # Arguments
/// * `config` - Matcher configuration
///
/// # Returns
/// * `Result<DecimalNumberMatcher, ConfigError>` - Configured matcher or error
///
/// # Example
/// ```
/// use decimal_matcher::prelude::*;
///
/// let config = DecimalMatcherConfig::monetary(10).with_field("amount");
/// let matcher = create_from_config(config).unwrap();
/// assert!(matcher.match_input(Some("12.50")).is_valid());
/// ```
pub fn create_from_config(
    config: DecimalMatcherConfig,
) -> Result<DecimalNumberMatcher, ConfigError> {
    // Validate configuration first
    config.validate()?;

    let matcher = DecimalNumberMatcher::new(config.constraints);
    Ok(match config.field {
        Some(field) => matcher.with_field(field),
        None => matcher,
    })
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Builder for creating decimal matchers with fluent API
///
/// # Example
/// ```
/// use decimal_matcher::prelude::*;
///
/// let matcher = DecimalMatcherBuilder::new()
///     .field("price")
///     .max_digits(5)
///     .max_decimal_places(2)
///     .build()
///     .unwrap();
///
/// assert!(matcher.match_input(Some("123.45")).is_valid());
/// ```
#[derive(Debug, Clone, Default)]
pub struct DecimalMatcherBuilder {
    field: Option<String>,
    max_digits: Option<u32>,
    max_decimal_places: Option<u32>,
}

impl DecimalMatcherBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field name used in log events
    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Limit the total digit count
    pub fn max_digits(mut self, max_digits: u32) -> Self {
        self.max_digits = Some(max_digits);
        self
    }

    /// Limit the decimal place count (requires `max_digits`)
    pub fn max_decimal_places(mut self, max_decimal_places: u32) -> Self {
        self.max_decimal_places = Some(max_decimal_places);
        self
    }

    /// Resolve the constraint policy
    pub fn constraints(&self) -> Result<DigitConstraints, ConfigError> {
        match (self.max_digits, self.max_decimal_places) {
            (None, None) => Ok(DigitConstraints::Default),
            (Some(max_digits), None) => Ok(DigitConstraints::MaxDigits { max_digits }),
            (Some(max_digits), Some(max_decimal_places)) => {
                Ok(DigitConstraints::MaxDigitsAndDecimals {
                    max_digits,
                    max_decimal_places,
                })
            },
            (None, Some(_)) => Err(ConfigError::DecimalPlacesWithoutDigits),
        }
    }

    /// Build the configuration without creating the matcher
    pub fn build_config(self) -> Result<DecimalMatcherConfig, ConfigError> {
        let config = DecimalMatcherConfig {
            constraints: self.constraints()?,
            field: self.field,
        };
        config.validate()?;
        Ok(config)
    }

    /// Build the matcher
    pub fn build(self) -> Result<DecimalNumberMatcher, ConfigError> {
        create_from_config(self.build_config()?)
    }
}
