// ============================================================================
// Matcher Configuration
// Digit-count constraint policies and matcher configuration
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum total digit count applied when no parameters are given.
pub const DEFAULT_MAX_DIGITS: u32 = 11;

// ============================================================================
// Configuration Errors
// ============================================================================

/// Errors raised while constructing a matcher configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// More than two positional parameters
    TooManyParameters(usize),
    /// Decimal-place limit requested without a digit limit
    DecimalPlacesWithoutDigits,
    /// Field name present but empty
    EmptyField,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::TooManyParameters(count) => write!(
                f,
                "decimal matcher takes 0 to 2 parameters, got {}",
                count
            ),
            ConfigError::DecimalPlacesWithoutDigits => write!(
                f,
                "a decimal place limit requires a maximum digit count"
            ),
            ConfigError::EmptyField => write!(f, "field name cannot be empty"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Digit Constraints
// ============================================================================

/// Constraint policy, selected by how many parameters were supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "policy", rename_all = "snake_case"))]
pub enum DigitConstraints {
    /// At most [`DEFAULT_MAX_DIGITS`] total digits
    #[default]
    Default,

    /// At most `max_digits` total digits
    MaxDigits { max_digits: u32 },

    /// At most `max_digits` total digits and `max_decimal_places` fractional
    /// digits, checked independently
    MaxDigitsAndDecimals {
        max_digits: u32,
        max_decimal_places: u32,
    },
}

impl DigitConstraints {
    /// Build from 0, 1 or 2 positional parameters.
    ///
    /// # Errors
    /// Returns `TooManyParameters` for any other count.
    pub fn from_params(params: &[u32]) -> Result<Self, ConfigError> {
        match *params {
            [] => Ok(DigitConstraints::Default),
            [max_digits] => Ok(DigitConstraints::MaxDigits { max_digits }),
            [max_digits, max_decimal_places] => Ok(DigitConstraints::MaxDigitsAndDecimals {
                max_digits,
                max_decimal_places,
            }),
            _ => Err(ConfigError::TooManyParameters(params.len())),
        }
    }

    /// Positional parameters this policy was built from.
    pub fn params(&self) -> Vec<u32> {
        match *self {
            DigitConstraints::Default => Vec::new(),
            DigitConstraints::MaxDigits { max_digits } => vec![max_digits],
            DigitConstraints::MaxDigitsAndDecimals {
                max_digits,
                max_decimal_places,
            } => vec![max_digits, max_decimal_places],
        }
    }

    /// Effective total digit limit.
    pub fn max_digits(&self) -> u32 {
        match *self {
            DigitConstraints::Default => DEFAULT_MAX_DIGITS,
            DigitConstraints::MaxDigits { max_digits }
            | DigitConstraints::MaxDigitsAndDecimals { max_digits, .. } => max_digits,
        }
    }

    /// Decimal place limit, if this policy enforces one.
    pub fn max_decimal_places(&self) -> Option<u32> {
        match *self {
            DigitConstraints::MaxDigitsAndDecimals {
                max_decimal_places, ..
            } => Some(max_decimal_places),
            _ => None,
        }
    }
}

impl TryFrom<&[u32]> for DigitConstraints {
    type Error = ConfigError;

    fn try_from(params: &[u32]) -> Result<Self, Self::Error> {
        Self::from_params(params)
    }
}

impl fmt::Display for DigitConstraints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DigitConstraints::Default => write!(f, "digits<={}", DEFAULT_MAX_DIGITS),
            DigitConstraints::MaxDigits { max_digits } => write!(f, "digits<={}", max_digits),
            DigitConstraints::MaxDigitsAndDecimals {
                max_digits,
                max_decimal_places,
            } => write!(f, "digits<={}, decimals<={}", max_digits, max_decimal_places),
        }
    }
}

// ============================================================================
// Matcher Configuration
// ============================================================================

/// Configuration for creating a decimal matcher
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DecimalMatcherConfig {
    /// Optional: name of the validated field, used as log context
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub field: Option<String>,

    /// Constraint policy
    #[cfg_attr(feature = "serde", serde(default))]
    pub constraints: DigitConstraints,
}

impl DecimalMatcherConfig {
    pub fn new(constraints: DigitConstraints) -> Self {
        Self {
            field: None,
            constraints,
        }
    }

    /// Create from positional parameters.
    pub fn from_params(params: &[u32]) -> Result<Self, ConfigError> {
        DigitConstraints::from_params(params).map(Self::new)
    }

    /// Builder method: Set the field name
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if matches!(self.field.as_deref(), Some("")) {
            return Err(ConfigError::EmptyField);
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl DecimalMatcherConfig {
    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl DecimalMatcherConfig {
    /// Money amount: 2 decimal places within `max_digits` total
    pub fn monetary(max_digits: u32) -> Self {
        Self::new(DigitConstraints::MaxDigitsAndDecimals {
            max_digits,
            max_decimal_places: 2,
        })
    }

    /// Whole numbers with at most `max_digits` digits
    pub fn integral(max_digits: u32) -> Self {
        Self::new(DigitConstraints::MaxDigitsAndDecimals {
            max_digits,
            max_decimal_places: 0,
        })
    }
}
