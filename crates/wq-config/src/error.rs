//! Error types for configuration lookup

use thiserror::Error;

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur while resolving a configuration profile
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No profile is registered under the requested name
    #[error("Configuration profile '{name}' not found")]
    MissingProfile { name: String },
}

impl ConfigError {
    /// Build a [`ConfigError::MissingProfile`] for `name`
    pub fn missing(name: impl Into<String>) -> Self {
        ConfigError::MissingProfile { name: name.into() }
    }
}
