//! Configuration profiles
//!
//! A [`ConfigProfile`] is a fully resolved bundle of settings. Environment
//! specific profiles start from [`ConfigProfile::base`] and overwrite a few
//! named fields through [`ConfigProfileBuilder`].

use serde::{Deserialize, Serialize};

/// Connection string for the on-disk database
pub const DEFAULT_STORAGE_URI: &str = "sqlite:///water_quality.db";

/// Connection string for the throwaway database used by test runs
pub const IN_MEMORY_STORAGE_URI: &str = "sqlite:///:memory:";

/// Signing key shared by every profile
pub const DEFAULT_SECRET_KEY: &str = "iot-water-quality-secret-key-2026";

/// Settings handed to the host application for one environment
///
/// # Examples
///
/// ```
/// use wq_config::ConfigProfile;
///
/// let profile = ConfigProfile::builder().debug(true).build();
/// assert!(profile.debug);
/// assert_eq!(profile.storage_connection_string, "sqlite:///water_quality.db");
/// ```
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigProfile {
    /// Address of the persistence layer
    pub storage_connection_string: String,

    /// Whether the ORM tracks object modifications
    pub track_modifications: bool,

    /// Key used by the session/signing subsystem
    pub secret_key: String,

    /// Whether serialized JSON output has its keys sorted
    pub sort_serialized_keys: bool,

    /// Verbose error pages and debug tooling
    pub debug: bool,

    /// Test harness mode
    pub testing: bool,
}

impl ConfigProfile {
    /// The base profile every environment inherits from
    pub fn base() -> Self {
        Self {
            storage_connection_string: DEFAULT_STORAGE_URI.to_string(),
            track_modifications: false,
            secret_key: DEFAULT_SECRET_KEY.to_string(),
            sort_serialized_keys: false,
            debug: false,
            testing: false,
        }
    }

    /// Create a builder whose unset fields fall back to [`ConfigProfile::base`]
    pub fn builder() -> ConfigProfileBuilder {
        ConfigProfileBuilder::default()
    }

    /// Profile for local development
    pub fn development() -> Self {
        Self::builder().debug(true).testing(false).build()
    }

    /// Profile for deployed instances
    pub fn production() -> Self {
        Self::builder().debug(false).testing(false).build()
    }

    /// Profile for automated tests
    pub fn testing() -> Self {
        Self::builder()
            .testing(true)
            .storage_connection_string(IN_MEMORY_STORAGE_URI)
            .build()
    }
}

impl Default for ConfigProfile {
    fn default() -> Self {
        Self::base()
    }
}

/// Builder for ConfigProfile
#[derive(Debug, Default)]
pub struct ConfigProfileBuilder {
    storage_connection_string: Option<String>,
    track_modifications: Option<bool>,
    secret_key: Option<String>,
    sort_serialized_keys: Option<bool>,
    debug: Option<bool>,
    testing: Option<bool>,
}

impl ConfigProfileBuilder {
    /// Set the storage connection string
    pub fn storage_connection_string(mut self, uri: impl Into<String>) -> Self {
        self.storage_connection_string = Some(uri.into());
        self
    }

    /// Set modification tracking
    pub fn track_modifications(mut self, enabled: bool) -> Self {
        self.track_modifications = Some(enabled);
        self
    }

    /// Set the secret key
    pub fn secret_key(mut self, key: impl Into<String>) -> Self {
        self.secret_key = Some(key.into());
        self
    }

    /// Set key sorting for serialized output
    pub fn sort_serialized_keys(mut self, enabled: bool) -> Self {
        self.sort_serialized_keys = Some(enabled);
        self
    }

    /// Set the debug flag
    pub fn debug(mut self, enabled: bool) -> Self {
        self.debug = Some(enabled);
        self
    }

    /// Set the testing flag
    pub fn testing(mut self, enabled: bool) -> Self {
        self.testing = Some(enabled);
        self
    }

    /// Build the profile
    pub fn build(self) -> ConfigProfile {
        let base = ConfigProfile::base();

        ConfigProfile {
            storage_connection_string: self
                .storage_connection_string
                .unwrap_or(base.storage_connection_string),
            track_modifications: self.track_modifications.unwrap_or(base.track_modifications),
            secret_key: self.secret_key.unwrap_or(base.secret_key),
            sort_serialized_keys: self.sort_serialized_keys.unwrap_or(base.sort_serialized_keys),
            debug: self.debug.unwrap_or(base.debug),
            testing: self.testing.unwrap_or(base.testing),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_profile() {
        let base = ConfigProfile::base();
        assert_eq!(base.storage_connection_string, DEFAULT_STORAGE_URI);
        assert_eq!(base.secret_key, DEFAULT_SECRET_KEY);
        assert!(!base.track_modifications);
        assert!(!base.sort_serialized_keys);
        assert_eq!(ConfigProfile::default(), base);
    }

    #[test]
    fn test_empty_builder_is_base() {
        assert_eq!(ConfigProfile::builder().build(), ConfigProfile::base());
    }

    #[test]
    fn test_builder_overrides_only_named_fields() {
        let profile = ConfigProfile::builder()
            .secret_key("other")
            .sort_serialized_keys(true)
            .build();

        assert_eq!(profile.secret_key, "other");
        assert!(profile.sort_serialized_keys);
        assert_eq!(profile.storage_connection_string, DEFAULT_STORAGE_URI);
        assert!(!profile.track_modifications);
    }

    #[test]
    fn test_testing_inherits_debug() {
        let testing = ConfigProfile::testing();
        assert!(testing.testing);
        assert_eq!(testing.debug, ConfigProfile::base().debug);
        assert_eq!(testing.storage_connection_string, IN_MEMORY_STORAGE_URI);
    }

    #[test]
    fn test_serde() {
        let profile = ConfigProfile::development();
        let json = serde_json::to_string(&profile).unwrap();
        let parsed: ConfigProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, profile);
    }
}
