//! Export of a profile under the host framework's setting keys

use crate::profile::ConfigProfile;
use serde_json::{Map, Value};

/// Setting keys understood by the host web application
pub mod keys {
    /// Database connection string
    pub const DATABASE_URI: &str = "SQLALCHEMY_DATABASE_URI";
    /// ORM modification tracking
    pub const TRACK_MODIFICATIONS: &str = "SQLALCHEMY_TRACK_MODIFICATIONS";
    /// Session signing key
    pub const SECRET_KEY: &str = "SECRET_KEY";
    /// Sorted keys in JSON responses
    pub const JSON_SORT_KEYS: &str = "JSON_SORT_KEYS";
    /// Debug mode
    pub const DEBUG: &str = "DEBUG";
    /// Testing mode
    pub const TESTING: &str = "TESTING";

    /// Every key emitted by [`ConfigProfile::settings`](crate::ConfigProfile::settings)
    pub const ALL: [&str; 6] = [
        DATABASE_URI,
        TRACK_MODIFICATIONS,
        SECRET_KEY,
        JSON_SORT_KEYS,
        DEBUG,
        TESTING,
    ];
}

impl ConfigProfile {
    /// The profile as a flat key/value map for the host application
    ///
    /// # Examples
    ///
    /// ```
    /// use wq_config::{ConfigProfile, keys};
    /// use serde_json::json;
    ///
    /// let settings = ConfigProfile::testing().settings();
    /// assert_eq!(settings[keys::TESTING], json!(true));
    /// assert_eq!(settings[keys::DATABASE_URI], json!("sqlite:///:memory:"));
    /// ```
    pub fn settings(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert(
            keys::DATABASE_URI.to_string(),
            Value::from(self.storage_connection_string.as_str()),
        );
        map.insert(
            keys::TRACK_MODIFICATIONS.to_string(),
            Value::from(self.track_modifications),
        );
        map.insert(keys::SECRET_KEY.to_string(), Value::from(self.secret_key.as_str()));
        map.insert(
            keys::JSON_SORT_KEYS.to_string(),
            Value::from(self.sort_serialized_keys),
        );
        map.insert(keys::DEBUG.to_string(), Value::from(self.debug));
        map.insert(keys::TESTING.to_string(), Value::from(self.testing));
        map
    }

    /// Read a single setting by its host key
    pub fn get_setting(&self, key: &str) -> Option<Value> {
        self.settings().remove(key)
    }
}
