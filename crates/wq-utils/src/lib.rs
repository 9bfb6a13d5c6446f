//! Shared utilities for wq-rs
//!
//! Ambient helpers used across the workspace. Today that is tracing setup for
//! host processes and test suites.

pub mod logging;

pub use logging::{LoggingError, init_tracing, try_init_tracing};
