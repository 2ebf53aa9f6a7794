// SPDX-License-Identifier: MIT OR Apache-2.0

//! Namespaced configuration bag.
//!
//! A [`ConfigBag`] groups related settings under a name. Each simple key handed to the
//! bag is qualified with that name before it reaches the store, so two bags with
//! different names never see each other's values.

use crate::domain::config_key::ConfigKey;
use crate::domain::config_value::ConfigValue;
use crate::domain::errors::{ConfigError, Result};
use crate::ports::ConfigStore;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// A bag of related configuration values sharing a namespace.
///
/// The optional getters (`get*`) return `None` when the store has no value; the typed
/// ones fail only when a present value cannot be coerced. The required getters
/// (`require*`) turn absence into [`ConfigError::Missing`] and pass type mismatches
/// through unchanged.
///
/// A bag is immutable after construction and can be cloned and shared across
/// threads freely; clones share the same store handle.
///
/// # Examples
///
/// ```rust
/// use configbag::adapters::MemoryStore;
/// use configbag::domain::{ConfigBag, Result};
/// use std::sync::Arc;
///
/// # fn main() -> Result<()> {
/// let store = MemoryStore::new().with_value("pulumi:foo:a", "42");
/// let bag = ConfigBag::new("pulumi:foo", Arc::new(store))?;
///
/// assert_eq!(bag.require_int("a")?, 42);
/// assert_eq!(bag.get("b"), None);
/// assert!(bag.require("b").unwrap_err().is_missing());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ConfigBag {
    name: String,
    store: Arc<dyn ConfigStore>,
}

impl ConfigBag {
    /// Creates a bag named `name` that reads from `store`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidArgument`] if `name` is empty.
    pub fn new(name: impl Into<String>, store: Arc<dyn ConfigStore>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(ConfigError::InvalidArgument {
                message: "Missing name argument".to_string(),
            });
        }
        Ok(Self { name, store })
    }

    /// Returns the bag's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Turns a simple key into a fully-qualified one by prepending the bag's name.
    pub fn full_key(&self, key: &str) -> ConfigKey {
        ConfigKey::qualified(&self.name, key)
    }

    /// Returns the raw value for `key`, or `None` if the store has no entry.
    pub fn get(&self, key: &str) -> Option<String> {
        self.lookup(&self.full_key(key)).map(ConfigValue::into_string)
    }

    /// Returns the value for `key` as a bool, or `None` if absent.
    ///
    /// # Errors
    ///
    /// [`ConfigError::TypeMismatch`] if the value is not one of `true`, `True`,
    /// `false` or `False`.
    pub fn get_bool(&self, key: &str) -> Result<Option<bool>> {
        self.get_with(key, ConfigValue::as_bool)
    }

    /// Returns the value for `key` as an integer, or `None` if absent.
    ///
    /// Surrounding whitespace is ignored. Values are read as `i64`; integers outside
    /// that range are reported as malformed.
    ///
    /// # Errors
    ///
    /// [`ConfigError::TypeMismatch`] if the value is not a base-10 integer that fits
    /// in an `i64`.
    pub fn get_int(&self, key: &str) -> Result<Option<i64>> {
        self.get_with(key, ConfigValue::as_int)
    }

    /// Returns the value for `key` as a float, or `None` if absent.
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// [`ConfigError::TypeMismatch`] if the value is not a floating-point literal.
    pub fn get_float(&self, key: &str) -> Result<Option<f64>> {
        self.get_with(key, ConfigValue::as_float)
    }

    /// Returns the value for `key` parsed as `T`, or `None` if absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use configbag::adapters::MemoryStore;
    /// use configbag::domain::ConfigBag;
    /// use std::net::IpAddr;
    /// use std::sync::Arc;
    ///
    /// let store = MemoryStore::new().with_value("net:bind", "10.0.0.1");
    /// let bag = ConfigBag::new("net", Arc::new(store)).unwrap();
    /// let ip: Option<IpAddr> = bag.get_parsed("bind").unwrap();
    /// assert_eq!(ip.unwrap().to_string(), "10.0.0.1");
    /// ```
    pub fn get_parsed<T: FromStr>(&self, key: &str) -> Result<Option<T>> {
        self.get_with(key, |value, full_key| value.parse::<T>(full_key))
    }

    /// Returns the raw value for `key`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Missing`] if the store has no entry.
    pub fn require(&self, key: &str) -> Result<String> {
        self.required(key, self.get(key))
    }

    /// Returns the value for `key` as a bool.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Missing`] if absent, [`ConfigError::TypeMismatch`] if malformed.
    pub fn require_bool(&self, key: &str) -> Result<bool> {
        self.required(key, self.get_bool(key)?)
    }

    /// Returns the value for `key` as an integer.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Missing`] if absent, [`ConfigError::TypeMismatch`] if malformed.
    pub fn require_int(&self, key: &str) -> Result<i64> {
        self.required(key, self.get_int(key)?)
    }

    /// Returns the value for `key` as a float.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Missing`] if absent, [`ConfigError::TypeMismatch`] if malformed.
    pub fn require_float(&self, key: &str) -> Result<f64> {
        self.required(key, self.get_float(key)?)
    }

    /// Returns the value for `key` parsed as `T`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Missing`] if absent, [`ConfigError::TypeMismatch`] if malformed.
    pub fn require_parsed<T: FromStr>(&self, key: &str) -> Result<T> {
        self.required(key, self.get_parsed(key)?)
    }

    fn lookup(&self, full_key: &ConfigKey) -> Option<ConfigValue> {
        self.store.read(full_key)
    }

    fn get_with<T, F>(&self, key: &str, coerce: F) -> Result<Option<T>>
    where
        F: FnOnce(&ConfigValue, &ConfigKey) -> Result<T>,
    {
        let full_key = self.full_key(key);
        self.lookup(&full_key)
            .map(|value| coerce(&value, &full_key))
            .transpose()
    }

    fn required<T>(&self, key: &str, value: Option<T>) -> Result<T> {
        value.ok_or_else(|| ConfigError::Missing {
            key: self.full_key(key).into_string(),
        })
    }
}

impl fmt::Debug for ConfigBag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigBag")
            .field("name", &self.name)
            .field("store", &self.store.name())
            .finish()
    }
}
