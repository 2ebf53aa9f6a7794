// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fully-qualified configuration key newtype.
//!
//! A bag never hands a simple key to a store. It first composes the bag name and the
//! simple key into a [`ConfigKey`], and that is the only unit a store ever sees.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator placed between a bag name and a simple key.
pub const KEY_SEPARATOR: char = ':';

/// A fully-qualified configuration key such as `pulumi:foo:a`.
///
/// # Examples
///
/// ```
/// use configbag::domain::config_key::ConfigKey;
///
/// let key = ConfigKey::qualified("pulumi:foo", "a");
/// assert_eq!(key.as_str(), "pulumi:foo:a");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigKey(String);

impl ConfigKey {
    /// Creates a `ConfigKey` from an already fully-qualified string.
    pub fn new(key: String) -> Self {
        ConfigKey(key)
    }

    /// Composes a namespace and a simple key into a fully-qualified key.
    ///
    /// The simple key is not validated; an empty key yields a key ending in the
    /// separator.
    ///
    /// # Examples
    ///
    /// ```
    /// use configbag::domain::config_key::ConfigKey;
    ///
    /// assert_eq!(ConfigKey::qualified("ns", "a").as_str(), "ns:a");
    /// assert_eq!(ConfigKey::qualified("ns", "").as_str(), "ns:");
    /// ```
    pub fn qualified(namespace: &str, key: &str) -> Self {
        let mut full = String::with_capacity(namespace.len() + 1 + key.len());
        full.push_str(namespace);
        full.push(KEY_SEPARATOR);
        full.push_str(key);
        ConfigKey(full)
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the `ConfigKey` into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Maps the key onto an environment variable name under `prefix`.
    ///
    /// The key is uppercased and every separator becomes an underscore.
    ///
    /// # Examples
    ///
    /// ```
    /// use configbag::domain::config_key::ConfigKey;
    ///
    /// let key = ConfigKey::from("pulumi:foo:a");
    /// assert_eq!(key.env_var_name("PULUMI_CONFIG"), "PULUMI_CONFIG_PULUMI_FOO_A");
    /// ```
    pub fn env_var_name(&self, prefix: &str) -> String {
        let suffix = self.0.replace(KEY_SEPARATOR, "_").to_uppercase();
        format!("{}_{}", prefix, suffix)
    }
}

impl From<String> for ConfigKey {
    fn from(s: String) -> Self {
        ConfigKey(s)
    }
}

impl From<&str> for ConfigKey {
    fn from(s: &str) -> Self {
        ConfigKey(s.to_string())
    }
}

impl From<ConfigKey> for String {
    fn from(key: ConfigKey) -> Self {
        key.0
    }
}

impl AsRef<str> for ConfigKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
