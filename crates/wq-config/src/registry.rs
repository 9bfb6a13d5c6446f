//! Configuration profile registry
//!
//! This module provides [`ConfigRegistry`], an immutable table from profile
//! name to resolved [`ConfigProfile`]. The table is built once and only read
//! afterwards, so it can be shared across threads without locking.

use crate::environment::{DEFAULT_PROFILE, Environment};
use crate::error::{ConfigError, Result};
use crate::profile::ConfigProfile;
use std::collections::HashMap;
use std::sync::{Arc, LazyLock};
use tracing::{debug, warn};

static GLOBAL: LazyLock<ConfigRegistry> = LazyLock::new(ConfigRegistry::new);

/// Mapping from environment name to configuration profile
///
/// Holds `development`, `production`, `testing` and the `default` alias,
/// which shares the development profile instance.
///
/// # Examples
///
/// ```
/// use wq_config::{ConfigError, ConfigRegistry};
///
/// let registry = ConfigRegistry::global();
///
/// let testing = registry.resolve("testing")?;
/// assert_eq!(testing.storage_connection_string, "sqlite:///:memory:");
///
/// assert!(matches!(
///     registry.resolve("staging"),
///     Err(ConfigError::MissingProfile { .. })
/// ));
/// # Ok::<(), ConfigError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigRegistry {
    profiles: HashMap<String, Arc<ConfigProfile>>,
}

impl Default for ConfigRegistry {
    fn default() -> Self {
        let mut profiles = HashMap::new();

        for env in Environment::ALL {
            profiles.insert(env.name().to_string(), Arc::new(env.profile()));
        }

        if let Some(development) = profiles.get(Environment::default().name()).cloned() {
            profiles.insert(DEFAULT_PROFILE.to_string(), development);
        }

        Self { profiles }
    }
}

impl ConfigRegistry {
    /// Build the standard profile table
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry, built on first use
    pub fn global() -> &'static ConfigRegistry {
        &GLOBAL
    }

    /// Resolve a profile by name
    ///
    /// Names are matched exactly. There is no fallback to `default`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingProfile`] if `name` is not registered.
    pub fn resolve(&self, name: &str) -> Result<Arc<ConfigProfile>> {
        let Some(profile) = self.get(name) else {
            warn!(profile = name, available = ?self.names(), "Unknown configuration profile");
            return Err(ConfigError::missing(name));
        };

        debug!(profile = name, "Resolved configuration profile");
        Ok(profile)
    }

    /// Resolve the profile for a typed environment
    pub fn resolve_env(&self, env: Environment) -> Arc<ConfigProfile> {
        self.profiles
            .get(env.name())
            .cloned()
            .unwrap_or_else(|| Arc::new(env.profile()))
    }

    /// Get a profile by name
    ///
    /// Returns `None` if the name is not registered.
    pub fn get(&self, name: &str) -> Option<Arc<ConfigProfile>> {
        self.profiles.get(name).cloned()
    }

    /// Check if a profile name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.profiles.contains_key(name)
    }

    /// List all registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.profiles.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Iterate over `(name, profile)` pairs in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<ConfigProfile>)> {
        self.profiles.iter().map(|(name, profile)| (name.as_str(), profile))
    }

    /// Get the number of registered names, aliases included
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_names() {
        let registry = ConfigRegistry::new();
        assert_eq!(
            registry.names(),
            vec!["default", "development", "production", "testing"]
        );
        assert_eq!(registry.len(), 4);
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_default_shares_development_instance() {
        let registry = ConfigRegistry::new();
        let default = registry.resolve("default").unwrap();
        let development = registry.resolve("development").unwrap();
        assert!(Arc::ptr_eq(&default, &development));
    }

    #[test]
    fn test_resolve_is_exact() {
        let registry = ConfigRegistry::new();
        assert_eq!(
            registry.resolve("Development").unwrap_err(),
            ConfigError::missing("Development")
        );
        assert!(registry.resolve("").is_err());
    }

    #[test]
    fn test_resolve_env_matches_resolve() {
        let registry = ConfigRegistry::new();
        for env in Environment::ALL {
            let by_name = registry.resolve(env.name()).unwrap();
            assert!(Arc::ptr_eq(&registry.resolve_env(env), &by_name));
        }
    }

    #[test]
    fn test_contains_and_get() {
        let registry = ConfigRegistry::new();
        assert!(registry.contains("production"));
        assert!(!registry.contains("staging"));
        assert!(registry.get("staging").is_none());
    }

    #[test]
    fn test_iter_visits_every_name() {
        let registry = ConfigRegistry::new();
        let mut names: Vec<&str> = registry.iter().map(|(name, _)| name).collect();
        names.sort_unstable();
        assert_eq!(names, registry.names());
    }

    #[test]
    fn test_global_is_shared() {
        assert!(std::ptr::eq(ConfigRegistry::global(), ConfigRegistry::global()));
    }
}
