// ============================================================================
// Error Sink Interface
// Defines the contract for collecting validation errors
// ============================================================================

use crate::domain::{ErrorCode, ValidationError, ValidationResult};
use std::borrow::Cow;

/// Receiver for validation errors.
/// Matchers only append; they never read or clear a sink.
pub trait ErrorSink {
    /// Append a (code, message) entry
    fn add_error(&mut self, code: Cow<'static, str>, message: Cow<'static, str>);

    /// Append a known error code with its default message
    fn add_error_code(&mut self, code: ErrorCode) {
        self.add_error(Cow::Borrowed(code.code()), Cow::Borrowed(code.message()));
    }
}

impl ErrorSink for ValidationResult {
    fn add_error(&mut self, code: Cow<'static, str>, message: Cow<'static, str>) {
        self.push(ValidationError { code, message });
    }
}

impl ErrorSink for Vec<ValidationError> {
    fn add_error(&mut self, code: Cow<'static, str>, message: Cow<'static, str>) {
        self.push(ValidationError { code, message });
    }
}

impl<S: ErrorSink + ?Sized> ErrorSink for &mut S {
    fn add_error(&mut self, code: Cow<'static, str>, message: Cow<'static, str>) {
        (**self).add_error(code, message);
    }
}

/// No-op sink for benchmarks and callers that only need side-effect free runs
pub struct NoOpErrorSink;

impl ErrorSink for NoOpErrorSink {
    fn add_error(&mut self, _code: Cow<'static, str>, _message: Cow<'static, str>) {
        // Do nothing
    }
}

/// Logging sink: logs every entry, then forwards it to the wrapped sink
pub struct LoggingErrorSink<S> {
    inner: S,
}

impl<S: ErrorSink> LoggingErrorSink<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: ErrorSink> ErrorSink for LoggingErrorSink<S> {
    fn add_error(&mut self, code: Cow<'static, str>, message: Cow<'static, str>) {
        tracing::debug!(code = %code, message = %message, "Validation error");
        self.inner.add_error(code, message);
    }
}
