// ============================================================================
// Matcher Interface
// Defines the contract for pluggable value matchers
// ============================================================================

use super::ErrorSink;
use crate::domain::ValidationResult;

/// Strategy pattern interface for value matchers.
/// A matcher inspects an optional string value and reports errors to a sink.
pub trait Matcher: Send + Sync {
    /// Match a value, appending any errors to `sink`
    ///
    /// # Arguments
    /// * `input` - The value to check; `None` means absent
    /// * `sink` - Receiver for validation errors
    fn match_into(&self, input: Option<&str>, sink: &mut dyn ErrorSink);

    /// Get the matcher name for logging
    fn name(&self) -> &str;

    /// Match a value into a fresh result
    fn match_input(&self, input: Option<&str>) -> ValidationResult {
        let mut result = ValidationResult::new();
        self.match_into(input, &mut result);
        result
    }
}
