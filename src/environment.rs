//! # Launch Environment
//!
//! Opaque key-value context shared between the launcher and its transformation
//! services.
//!
//! The environment is handed into every load, initialize, and scan hook. The
//! core never interprets the stored values; services and the surrounding
//! launcher read and write them to coordinate (host version, directories,
//! launch target, and whatever service-private properties they need).

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Well-known property names the surrounding launcher conventionally sets.
pub mod keys {
    pub const VERSION: &str = "version";
    pub const ROOT_DIR: &str = "root_dir";
    pub const ASSETS_DIR: &str = "assets_dir";
    pub const LAUNCH_TARGET: &str = "launch_target";
}

/// Read/write property context forwarded into service hooks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    properties: HashMap<String, Value>,
}

impl Environment {
    /// Create an empty environment
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a property, if present
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    /// Set a property, replacing any previous value
    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.properties.insert(key.into(), value);
    }

    /// Read a property, inserting the computed default if it is absent
    pub fn compute_if_absent(
        &mut self,
        key: impl Into<String>,
        default: impl FnOnce() -> Value,
    ) -> &Value {
        self.properties.entry(key.into()).or_insert_with(default)
    }

    /// Check whether a property is present
    pub fn contains(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    /// Iterate over all property names
    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }

    /// Number of properties currently set
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Check whether any properties are set
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_and_get() {
        let mut env = Environment::new();
        assert!(env.is_empty());

        env.set(keys::VERSION, json!("1.2.0"));
        assert_eq!(env.get(keys::VERSION), Some(&json!("1.2.0")));
        assert!(env.contains(keys::VERSION));
        assert_eq!(env.len(), 1);

        env.set(keys::VERSION, json!("1.3.0"));
        assert_eq!(env.get(keys::VERSION), Some(&json!("1.3.0")));
        assert_eq!(env.len(), 1);
    }

    #[test]
    fn test_compute_if_absent() {
        let mut env = Environment::new();

        let value = env.compute_if_absent(keys::LAUNCH_TARGET, || json!("client"));
        assert_eq!(value, &json!("client"));

        // Present value wins over the default
        let value = env.compute_if_absent(keys::LAUNCH_TARGET, || json!("server"));
        assert_eq!(value, &json!("client"));
    }

    #[test]
    fn test_serde_round_trip() {
        let mut env = Environment::new();
        env.set(keys::ROOT_DIR, json!("/srv/launcher"));
        env.set("custom.flag", json!(true));

        let encoded = serde_json::to_string(&env).unwrap();
        let decoded: Environment = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, env);
    }
}
