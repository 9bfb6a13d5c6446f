//! Deployment environments
//!
//! [`Environment`] is the typed form of a profile name. Parsing accepts the
//! `default` alias, which maps to [`Environment::Development`].

use crate::error::ConfigError;
use crate::profile::ConfigProfile;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Name of the alias profile
pub const DEFAULT_PROFILE: &str = "default";

/// Environments with a dedicated configuration profile
///
/// # Examples
///
/// ```
/// use wq_config::Environment;
///
/// let env: Environment = "Production".parse().unwrap();
/// assert_eq!(env, Environment::Production);
/// assert_eq!(env.name(), "production");
///
/// let env: Environment = "default".parse().unwrap();
/// assert_eq!(env, Environment::Development);
///
/// assert!("staging".parse::<Environment>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development, also reachable as `default`
    #[default]
    Development,
    /// Deployed service
    Production,
    /// Automated test runs
    Testing,
}

impl Environment {
    /// Every environment, in registration order
    pub const ALL: [Environment; 3] = [
        Environment::Development,
        Environment::Production,
        Environment::Testing,
    ];

    /// Registry name of this environment
    pub fn name(self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
            Environment::Testing => "testing",
        }
    }

    /// Build the resolved profile for this environment
    pub fn profile(self) -> ConfigProfile {
        match self {
            Environment::Development => ConfigProfile::development(),
            Environment::Production => ConfigProfile::production(),
            Environment::Testing => ConfigProfile::testing(),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Parsing ignores case and accepts `default`, so it is more lenient than
/// [`ConfigRegistry::resolve`](crate::ConfigRegistry::resolve), which matches
/// registry names exactly.
impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | DEFAULT_PROFILE => Ok(Environment::Development),
            "production" => Ok(Environment::Production),
            "testing" => Ok(Environment::Testing),
            _ => Err(ConfigError::missing(s)),
        }
    }
}
