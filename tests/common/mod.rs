// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared helpers for integration tests.

use configbag::domain::{ConfigKey, ConfigValue};
use configbag::ports::ConfigStore;
use std::collections::HashMap;
use std::sync::Mutex;

/// A store fake that records every key it is asked for.
#[derive(Debug, Default)]
pub struct RecordingStore {
    values: HashMap<String, String>,
    reads: Mutex<Vec<String>>,
}

impl RecordingStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a value under a fully-qualified key.
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Returns the keys read so far, in order.
    #[allow(dead_code)]
    pub fn reads(&self) -> Vec<String> {
        self.reads.lock().unwrap().clone()
    }
}

impl ConfigStore for RecordingStore {
    fn name(&self) -> &str {
        "recording"
    }

    fn read(&self, key: &ConfigKey) -> Option<ConfigValue> {
        self.reads.lock().unwrap().push(key.as_str().to_string());
        self.values
            .get(key.as_str())
            .map(|v| ConfigValue::from(v.as_str()))
    }
}

/// Installs a test tracing subscriber once; later calls are no-ops.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}
