//! Environment configuration for the wq-rs water-quality service
//!
//! This crate holds the runtime configuration profiles for each deployment
//! environment and a registry that resolves a profile by name.
//!
//! # Features
//!
//! - **Base profile with overrides**: every environment starts from
//!   [`ConfigProfile::base`] and replaces a few fields
//! - **Static registry**: [`ConfigRegistry::global`] is built once and read-only
//!   afterwards
//! - **Host export**: [`ConfigProfile::settings`] renders a profile under the
//!   web framework's setting keys
//!
//! # Quick Start
//!
//! ```
//! use wq_config::{ConfigRegistry, Environment};
//!
//! let registry = ConfigRegistry::global();
//!
//! let dev = registry.resolve("default").unwrap();
//! assert!(dev.debug);
//!
//! let prod = registry.resolve_env(Environment::Production);
//! assert!(!prod.debug);
//! assert_eq!(prod.secret_key, dev.secret_key);
//! ```

mod environment;
mod error;
mod profile;
mod registry;
mod settings;

pub use environment::{DEFAULT_PROFILE, Environment};
pub use error::{ConfigError, Result};
pub use profile::{
    ConfigProfile, ConfigProfileBuilder, DEFAULT_SECRET_KEY, DEFAULT_STORAGE_URI,
    IN_MEMORY_STORAGE_URI,
};
pub use registry::ConfigRegistry;
pub use settings::keys;

/// Resolve a profile from the process-wide registry
///
/// Shorthand for `ConfigRegistry::global().resolve(name)`.
pub fn resolve(name: &str) -> Result<std::sync::Arc<ConfigProfile>> {
    ConfigRegistry::global().resolve(name)
}
