// ============================================================================
// Logging Bootstrap
// fmt subscriber setup for binaries, demos and benchmarks
// ============================================================================

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid
pub const DEFAULT_FILTER: &str = "info";

/// Install a global fmt subscriber filtered by `RUST_LOG`.
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_logging() -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_rejected() {
        init_logging();
        assert!(!init_logging());
    }
}
