// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the configuration crate.
//!
//! This module defines the errors a configuration bag can report. All errors use
//! `thiserror` and carry structured context so callers can inspect them
//! programmatically as well as display them.

use std::fmt;
use thiserror::Error;

/// The type a raw configuration value was expected to coerce into.
///
/// Used as the expected-type label of [`ConfigError::TypeMismatch`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// A boolean (`"true"`, `"True"`, `"false"`, `"False"`).
    Bool,
    /// A base-10 signed integer.
    Int,
    /// A decimal or scientific floating-point number.
    Float,
    /// Any other `FromStr` type, labelled with its type name.
    Other(&'static str),
}

impl ValueType {
    /// Returns the label used in error messages.
    ///
    /// # Examples
    ///
    /// ```
    /// use configbag::domain::ValueType;
    ///
    /// assert_eq!(ValueType::Bool.as_str(), "bool");
    /// assert_eq!(ValueType::Float.as_str(), "float");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueType::Bool => "bool",
            ValueType::Int => "int",
            ValueType::Float => "float",
            ValueType::Other(name) => *name,
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The main error type for configuration operations.
///
/// Absence of a value is never an error on its own; it only becomes
/// [`ConfigError::Missing`] when a caller asks for a required value. A present value
/// that cannot be coerced is always [`ConfigError::TypeMismatch`], and the two are
/// never conflated.
///
/// # Examples
///
/// ```
/// use configbag::domain::errors::ConfigError;
///
/// let err = ConfigError::Missing {
///     key: "pulumi:foo:b".to_string(),
/// };
/// assert!(err.is_missing());
/// assert_eq!(err.key(), Some("pulumi:foo:b"));
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum ConfigError {
    /// A bag was constructed with an invalid argument, such as an empty name.
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of what was wrong
        message: String,
    },

    /// A present configuration value could not be coerced to the requested type.
    #[error("Configuration '{key}' value '{value}' is not a valid '{expected_type}'")]
    TypeMismatch {
        /// The fully-qualified key
        key: String,
        /// The offending raw value
        value: String,
        /// The type the value was expected to have
        expected_type: ValueType,
    },

    /// A required configuration value is absent.
    #[error(
        "Missing required configuration variable '{key}'\n    please set a value using the command `pulumi config set {key} <value>`"
    )]
    Missing {
        /// The fully-qualified key
        key: String,
    },
}

impl ConfigError {
    /// Returns the fully-qualified key the error refers to, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            ConfigError::TypeMismatch { key, .. } | ConfigError::Missing { key } => Some(key),
            ConfigError::InvalidArgument { .. } => None,
        }
    }

    /// Returns `true` for [`ConfigError::Missing`].
    pub fn is_missing(&self) -> bool {
        matches!(self, ConfigError::Missing { .. })
    }

    /// Returns `true` for [`ConfigError::TypeMismatch`].
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, ConfigError::TypeMismatch { .. })
    }
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
