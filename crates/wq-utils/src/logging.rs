//! Logging and tracing utilities

use thiserror::Error;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is not set
const DEFAULT_FILTER: &str = "info";

/// Error returned when a global subscriber could not be installed
#[derive(Error, Debug)]
pub enum LoggingError {
    /// A global subscriber was already set by someone else
    #[error("Failed to install tracing subscriber: {0}")]
    AlreadyInitialized(String),
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Initialize tracing subscriber with default configuration
///
/// Panics if a global subscriber is already installed. Use
/// [`try_init_tracing`] where that can happen (test binaries).
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Initialize tracing, reporting instead of panicking on double init
///
/// Output goes through the test writer so it is captured by `cargo test`.
pub fn try_init_tracing() -> Result<(), LoggingError> {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init()
        .map_err(|e| LoggingError::AlreadyInitialized(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_reported() {
        let _ = try_init_tracing();
        let second = try_init_tracing();
        assert!(matches!(second, Err(LoggingError::AlreadyInitialized(_))));
    }
}
