// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration store trait definition.
//!
//! This module defines the `ConfigStore` trait, the port through which a
//! [`ConfigBag`](crate::domain::ConfigBag) reaches the external store that actually
//! holds configuration values. A store exposes a single read operation keyed by a
//! fully-qualified key.

use crate::domain::{ConfigKey, ConfigValue};
use std::sync::Arc;

/// A read-only source of raw configuration values.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so bags sharing a store can be used from
/// multiple threads.
///
/// # Determinism
///
/// For the same key and the same underlying configuration state, `read` must return
/// the same result and must not have side effects visible to callers.
///
/// # Examples
///
/// ```rust
/// use configbag::domain::{ConfigKey, ConfigValue};
/// use configbag::ports::ConfigStore;
///
/// struct FixedStore;
///
/// impl ConfigStore for FixedStore {
///     fn name(&self) -> &str {
///         "fixed"
///     }
///
///     fn read(&self, key: &ConfigKey) -> Option<ConfigValue> {
///         (key.as_str() == "app:name").then(|| ConfigValue::from("MyApp"))
///     }
/// }
///
/// let store = FixedStore;
/// assert!(store.read_str("app:name").is_some());
/// assert!(store.read_str("app:other").is_none());
/// ```
pub trait ConfigStore: Send + Sync {
    /// Returns a short, descriptive name for this store such as `"memory"` or `"env"`.
    ///
    /// Used in log output only.
    fn name(&self) -> &str;

    /// Returns the value stored under the fully-qualified `key`, or `None` when the
    /// store has no entry for it.
    fn read(&self, key: &ConfigKey) -> Option<ConfigValue>;

    /// Reads a value by a fully-qualified key given as a string slice.
    ///
    /// Equivalent to `read(&ConfigKey::from(key))`.
    fn read_str(&self, key: &str) -> Option<ConfigValue> {
        self.read(&ConfigKey::from(key))
    }
}

impl<S: ConfigStore + ?Sized> ConfigStore for Arc<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn read(&self, key: &ConfigKey) -> Option<ConfigValue> {
        (**self).read(key)
    }
}

impl<S: ConfigStore + ?Sized> ConfigStore for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn read(&self, key: &ConfigKey) -> Option<ConfigValue> {
        (**self).read(key)
    }
}
