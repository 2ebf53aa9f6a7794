// SPDX-License-Identifier: MIT OR Apache-2.0

//! Layered configuration store.
//!
//! Chains several stores together so that, for example, explicitly-set values take
//! precedence over values from the environment.

use crate::domain::{ConfigKey, ConfigValue};
use crate::ports::ConfigStore;
use std::fmt;
use std::sync::Arc;

/// A store that consults an ordered list of stores and returns the first value found.
///
/// Stores added earlier take precedence over stores added later.
///
/// # Examples
///
/// ```rust
/// use configbag::adapters::{LayeredStore, MemoryStore};
/// use configbag::ports::ConfigStore;
/// use std::sync::Arc;
///
/// let explicit = MemoryStore::new().with_value("app:port", "9090");
/// let fallback = MemoryStore::new()
///     .with_value("app:port", "8080")
///     .with_value("app:name", "MyApp");
///
/// let store = LayeredStore::new()
///     .with_store(Arc::new(explicit))
///     .with_store(Arc::new(fallback));
///
/// assert_eq!(store.read_str("app:port").unwrap().as_str(), "9090");
/// assert_eq!(store.read_str("app:name").unwrap().as_str(), "MyApp");
/// ```
#[derive(Clone, Default)]
pub struct LayeredStore {
    /// Stores in precedence order (highest first)
    layers: Vec<Arc<dyn ConfigStore>>,
}

impl LayeredStore {
    /// Creates a store with no layers; every read returns `None`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a layer with lower precedence than all existing layers.
    pub fn with_store(mut self, store: Arc<dyn ConfigStore>) -> Self {
        self.push(store);
        self
    }

    /// Appends a layer with lower precedence than all existing layers.
    pub fn push(&mut self, store: Arc<dyn ConfigStore>) {
        self.layers.push(store);
    }

    /// Returns the number of layers.
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Returns `true` if there are no layers.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl ConfigStore for LayeredStore {
    fn name(&self) -> &str {
        "layered"
    }

    fn read(&self, key: &ConfigKey) -> Option<ConfigValue> {
        for layer in &self.layers {
            if let Some(value) = layer.read(key) {
                tracing::trace!("Key '{}' served by store '{}'", key, layer.name());
                return Some(value);
            }
        }
        None
    }
}

impl fmt::Debug for LayeredStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.layers.iter().map(|layer| layer.name()))
            .finish()
    }
}
