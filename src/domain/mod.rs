// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types and logic.
//!
//! This module holds the configuration bag together with the key, value and error
//! types it is built from. It depends only on the [`ConfigStore`](crate::ports::ConfigStore)
//! port, never on a concrete store.

pub mod bag;
pub mod config_key;
pub mod config_value;
pub mod errors;

// Re-export commonly used types
pub use bag::ConfigBag;
pub use config_key::{ConfigKey, KEY_SEPARATOR};
pub use config_value::ConfigValue;
pub use errors::{ConfigError, Result, ValueType};
