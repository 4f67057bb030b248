// ============================================================================
// Engine Module
// Contains the decimal matcher and its factory
// ============================================================================

mod decimal_matcher;

pub mod factory;

pub use decimal_matcher::DecimalNumberMatcher;
pub use factory::{create_from_config, DecimalMatcherBuilder};
