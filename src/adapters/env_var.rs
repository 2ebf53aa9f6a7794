// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment variable configuration store adapter.
//!
//! Values are looked up in two places, in order:
//!
//! 1. A per-key variable named `<PREFIX>_<KEY>`, where the fully-qualified key is
//!    uppercased and its separators become underscores (see
//!    [`ConfigKey::env_var_name`]).
//! 2. A single bundled variable named `<PREFIX>` holding a JSON object that maps
//!    fully-qualified keys to string values.

use crate::domain::{ConfigKey, ConfigValue};
use crate::ports::ConfigStore;
use std::collections::HashMap;
use std::env;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Prefix used when none is given.
pub const DEFAULT_ENV_PREFIX: &str = "PULUMI_CONFIG";

/// Maximum length for environment variable keys (prevents DoS)
const MAX_ENV_KEY_LEN: usize = 512;

/// Maximum length for environment variable values (prevents DoS)
const MAX_ENV_VALUE_LEN: usize = 1048576; // 1MB

/// Snapshot of the variables relevant to one prefix.
#[derive(Debug, Default)]
struct EnvSnapshot {
    /// Per-key variables, by variable name
    vars: HashMap<String, String>,
    /// Parsed contents of the bundled variable, by fully-qualified key
    bundled: HashMap<String, String>,
}

/// Configuration store backed by environment variables.
///
/// Variables are read lazily on the first lookup and cached; call
/// [`reload`](EnvVarStore::reload) to pick up changes made to the process
/// environment afterwards.
///
/// # Examples
///
/// ```rust
/// use configbag::adapters::EnvVarStore;
/// use configbag::ports::ConfigStore;
/// use std::collections::HashMap;
///
/// let mut vars = HashMap::new();
/// vars.insert("APP_CONFIG_APP_PORT".to_string(), "8080".to_string());
/// vars.insert("APP_CONFIG".to_string(), r#"{"app:name": "MyApp"}"#.to_string());
///
/// let store = EnvVarStore::with_values("APP_CONFIG", vars);
/// assert_eq!(store.read_str("app:port").unwrap().as_str(), "8080");
/// assert_eq!(store.read_str("app:name").unwrap().as_str(), "MyApp");
/// ```
#[derive(Debug)]
pub struct EnvVarStore {
    prefix: String,
    /// Cached variables with interior mutability for thread-safe lazy loading
    cache: RwLock<Option<EnvSnapshot>>,
}

impl EnvVarStore {
    /// Creates a store using [`DEFAULT_ENV_PREFIX`].
    pub fn new() -> Self {
        Self::with_prefix(DEFAULT_ENV_PREFIX)
    }

    /// Creates a store that reads variables under `prefix`.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            cache: RwLock::new(None),
        }
    }

    /// Creates a store from a pre-populated variable map instead of the process
    /// environment.
    ///
    /// Intended for tests. The map is filtered and parsed exactly like the real
    /// environment would be. A later [`reload`](EnvVarStore::reload) replaces it
    /// with the process environment.
    pub fn with_values(prefix: impl Into<String>, vars: HashMap<String, String>) -> Self {
        let prefix = prefix.into();
        let snapshot = Self::snapshot(&prefix, vars);
        Self {
            prefix,
            cache: RwLock::new(Some(snapshot)),
        }
    }

    /// Returns the variable prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Discards the cached variables and reads the process environment again.
    pub fn reload(&self) {
        let snapshot = Self::snapshot(&self.prefix, process_vars());
        *self.write_cache() = Some(snapshot);
    }

    /// Builds a snapshot from the variables that belong to `prefix`.
    fn snapshot(prefix: &str, vars: impl IntoIterator<Item = (String, String)>) -> EnvSnapshot {
        let mut snapshot = EnvSnapshot::default();
        let key_prefix = format!("{}_", prefix);

        for (key, value) in vars {
            if key.len() > MAX_ENV_KEY_LEN || value.len() > MAX_ENV_VALUE_LEN {
                tracing::debug!(
                    "Skipping oversized environment variable: key_len={}, value_len={} (max key={}, max value={})",
                    key.len(),
                    value.len(),
                    MAX_ENV_KEY_LEN,
                    MAX_ENV_VALUE_LEN
                );
                continue;
            }

            if key == prefix {
                snapshot.bundled = Self::parse_bundled(&key, &value);
            } else if key.starts_with(&key_prefix) {
                snapshot.vars.insert(key, value);
            }
        }

        tracing::debug!(
            "Loaded {} per-key and {} bundled configuration values (prefix={})",
            snapshot.vars.len(),
            snapshot.bundled.len(),
            prefix
        );

        snapshot
    }

    /// Parses the bundled JSON variable, keeping only string values.
    fn parse_bundled(var: &str, raw: &str) -> HashMap<String, String> {
        let object = match serde_json::from_str::<serde_json::Map<String, serde_json::Value>>(raw)
        {
            Ok(object) => object,
            Err(e) => {
                tracing::warn!("Ignoring environment variable '{}': not a JSON object: {}", var, e);
                return HashMap::new();
            }
        };

        object
            .into_iter()
            .filter_map(|(key, value)| match value {
                serde_json::Value::String(s) => Some((key, s)),
                other => {
                    tracing::warn!(
                        "Ignoring '{}' in environment variable '{}': expected a string, found {}",
                        key,
                        var,
                        other
                    );
                    None
                }
            })
            .collect()
    }

    fn read_cache(&self) -> RwLockReadGuard<'_, Option<EnvSnapshot>> {
        self.cache.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_cache(&self) -> RwLockWriteGuard<'_, Option<EnvSnapshot>> {
        self.cache.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn lookup(snapshot: &EnvSnapshot, prefix: &str, key: &ConfigKey) -> Option<ConfigValue> {
        snapshot
            .vars
            .get(&key.env_var_name(prefix))
            .or_else(|| snapshot.bundled.get(key.as_str()))
            .map(|value| ConfigValue::from(value.as_str()))
    }
}

/// Process environment, skipping variables that are not valid unicode.
fn process_vars() -> impl Iterator<Item = (String, String)> {
    env::vars_os().filter_map(|(key, value)| match (key.into_string(), value.into_string()) {
        (Ok(key), Ok(value)) => Some((key, value)),
        (key, _) => {
            tracing::debug!("Skipping non-unicode environment variable: {:?}", key);
            None
        }
    })
}

impl Default for EnvVarStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for EnvVarStore {
    fn name(&self) -> &str {
        "env"
    }

    fn read(&self, key: &ConfigKey) -> Option<ConfigValue> {
        {
            let cache = self.read_cache();
            if let Some(snapshot) = cache.as_ref() {
                return Self::lookup(snapshot, &self.prefix, key);
            }
        }

        let mut cache = self.write_cache();
        let snapshot =
            cache.get_or_insert_with(|| Self::snapshot(&self.prefix, process_vars()));
        Self::lookup(snapshot, &self.prefix, key)
    }
}
