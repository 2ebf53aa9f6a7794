// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory configuration store.
//!
//! Holds configuration that was set explicitly by the host program, keyed by
//! fully-qualified key. The store is populated once at construction and is read-only
//! afterwards.

use crate::domain::{ConfigKey, ConfigValue};
use crate::ports::ConfigStore;
use std::collections::HashMap;

/// A store backed by a fixed map of fully-qualified keys to raw values.
///
/// # Examples
///
/// ```rust
/// use configbag::adapters::MemoryStore;
/// use configbag::ports::ConfigStore;
///
/// let store = MemoryStore::new()
///     .with_value("app:name", "MyApp")
///     .with_value("app:port", "8080");
///
/// assert_eq!(store.read_str("app:port").unwrap().as_str(), "8080");
/// assert!(store.read_str("app:debug").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `values`.
    pub fn with_values(values: HashMap<String, String>) -> Self {
        Self { values }
    }

    /// Adds a value under a fully-qualified key, replacing any previous value.
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Returns the number of stored values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the store holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for MemoryStore
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl ConfigStore for MemoryStore {
    fn name(&self) -> &str {
        "memory"
    }

    fn read(&self, key: &ConfigKey) -> Option<ConfigValue> {
        self.values
            .get(key.as_str())
            .map(|value| ConfigValue::from(value.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store() {
        let store = MemoryStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.read_str("ns:a").is_none());
    }

    #[test]
    fn test_with_value_overwrites() {
        let store = MemoryStore::new()
            .with_value("ns:a", "1")
            .with_value("ns:a", "2");
        assert_eq!(store.len(), 1);
        assert_eq!(store.read_str("ns:a"), Some(ConfigValue::from("2")));
    }

    #[test]
    fn test_with_values() {
        let mut values = HashMap::new();
        values.insert("ns:a".to_string(), "x".to_string());
        let store = MemoryStore::with_values(values);
        assert_eq!(store.read(&ConfigKey::qualified("ns", "a")), Some(ConfigValue::from("x")));
    }

    #[test]
    fn test_from_iterator() {
        let store: MemoryStore = [("ns:a", "1"), ("ns:b", "2")].into_iter().collect();
        assert_eq!(store.len(), 2);
        assert_eq!(store.read_str("ns:b"), Some(ConfigValue::from("2")));
    }

    #[test]
    fn test_lookup_is_exact() {
        let store = MemoryStore::new().with_value("ns:a", "1");
        assert!(store.read_str("NS:A").is_none());
        assert!(store.read_str("ns:a ").is_none());
        assert!(store.read_str("ns:").is_none());
    }

    #[test]
    fn test_empty_string_is_present() {
        let store = MemoryStore::new().with_value("ns:a", "");
        assert_eq!(store.read_str("ns:a"), Some(ConfigValue::from("")));
    }

    #[test]
    fn test_name() {
        assert_eq!(MemoryStore::new().name(), "memory");
    }
}
