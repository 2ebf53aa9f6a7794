// SPDX-License-Identifier: MIT OR Apache-2.0

//! Raw configuration value with strict, fallible coercions.
//!
//! Stores hand back values as plain strings. `ConfigValue` wraps such a string and
//! classifies it into a bool, integer, float or any other `FromStr` type. Coercion
//! never alters the raw string; a failed coercion becomes
//! [`ConfigError::TypeMismatch`] carrying the key, the raw value and the expected type.

use crate::domain::config_key::ConfigKey;
use crate::domain::errors::{ConfigError, Result, ValueType};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A raw configuration value as returned by a store.
///
/// # Examples
///
/// ```
/// use configbag::domain::{ConfigKey, ConfigValue};
///
/// let key = ConfigKey::from("ns:port");
/// let value = ConfigValue::from("8080");
/// assert_eq!(value.as_int(&key).unwrap(), 8080);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigValue(String);

impl ConfigValue {
    /// Creates a new `ConfigValue` from a `String`.
    pub fn new(value: String) -> Self {
        ConfigValue(value)
    }

    /// Returns the value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the value into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Coerces the value to a boolean.
    ///
    /// Only the literals `"true"` and `"True"` map to `true`, and `"false"` and
    /// `"False"` map to `false`. Anything else, including `"TRUE"`, `"1"`, `"yes"`,
    /// or surrounding whitespace, is a type mismatch.
    ///
    /// # Examples
    ///
    /// ```
    /// use configbag::domain::{ConfigKey, ConfigValue};
    ///
    /// let key = ConfigKey::from("ns:flag");
    /// assert_eq!(ConfigValue::from("True").as_bool(&key).unwrap(), true);
    /// assert!(ConfigValue::from("yes").as_bool(&key).is_err());
    /// ```
    pub fn as_bool(&self, key: &ConfigKey) -> Result<bool> {
        match self.0.as_str() {
            "true" | "True" => Ok(true),
            "false" | "False" => Ok(false),
            _ => Err(self.mismatch(key, ValueType::Bool)),
        }
    }

    /// Coerces the value to a base-10 `i64`.
    ///
    /// Surrounding whitespace is ignored and a leading `+` or `-` is accepted.
    /// Digit separators are not. Integers outside the `i64` range cannot be
    /// represented and are reported as a type mismatch.
    pub fn as_int(&self, key: &ConfigKey) -> Result<i64> {
        self.0
            .trim()
            .parse::<i64>()
            .map_err(|_| self.mismatch(key, ValueType::Int))
    }

    /// Coerces the value to an `f64`.
    ///
    /// Accepts decimal and scientific literals such as `"3.14"`, `"-2."`, `".5"` or
    /// `"1e10"`, as well as the `inf`/`nan` spellings. Surrounding whitespace is
    /// ignored.
    pub fn as_float(&self, key: &ConfigKey) -> Result<f64> {
        self.0
            .trim()
            .parse::<f64>()
            .map_err(|_| self.mismatch(key, ValueType::Float))
    }

    /// Parses the value into any type that implements `FromStr`.
    ///
    /// Surrounding whitespace is ignored. The expected type reported on failure is
    /// the type's name.
    ///
    /// # Examples
    ///
    /// ```
    /// use configbag::domain::{ConfigKey, ConfigValue};
    /// use std::net::IpAddr;
    ///
    /// let key = ConfigKey::from("ns:addr");
    /// let ip: IpAddr = ConfigValue::from("127.0.0.1").parse(&key).unwrap();
    /// assert_eq!(ip.to_string(), "127.0.0.1");
    /// ```
    pub fn parse<T: FromStr>(&self, key: &ConfigKey) -> Result<T> {
        self.0
            .trim()
            .parse::<T>()
            .map_err(|_| self.mismatch(key, ValueType::Other(std::any::type_name::<T>())))
    }

    fn mismatch(&self, key: &ConfigKey, expected_type: ValueType) -> ConfigError {
        ConfigError::TypeMismatch {
            key: key.as_str().to_string(),
            value: self.0.clone(),
            expected_type,
        }
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue(s)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue(s.to_string())
    }
}

impl From<ConfigValue> for String {
    fn from(value: ConfigValue) -> Self {
        value.0
    }
}

impl AsRef<str> for ConfigValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
