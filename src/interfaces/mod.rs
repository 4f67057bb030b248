// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod error_sink;
mod matcher;

pub use error_sink::{ErrorSink, LoggingErrorSink, NoOpErrorSink};
pub use matcher::Matcher;
