// SPDX-License-Identifier: MIT OR Apache-2.0

//! Namespaced, typed access to a key/value configuration store.
//!
//! A [`ConfigBag`](domain::ConfigBag) groups related settings under a name such as
//! `pulumi:foo`. Simple keys are qualified with that name (`pulumi:foo:a`) before
//! they are looked up in a store, and raw string values can be coerced to booleans,
//! integers, floats or any `FromStr` type.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: `ConfigBag`, `ConfigKey`, `ConfigValue` and `ConfigError`
//! - **Ports**: the `ConfigStore` trait, the single read operation a bag depends on
//! - **Adapters**: stores backed by memory, the environment, or a chain of stores
//!
//! # Missing versus malformed
//!
//! The `get*` methods return `None` for an absent key and fail with
//! [`ConfigError::TypeMismatch`](domain::ConfigError::TypeMismatch) only when a
//! present value cannot be coerced. The `require*` methods turn absence into
//! [`ConfigError::Missing`](domain::ConfigError::Missing) and never hide a type
//! mismatch behind it.
//!
//! # Feature Flags
//!
//! - `env`: Enable the environment variable store (default)
//! - `full`: Enable all features
//!
//! # Quick Start
//!
//! ```rust
//! use configbag::prelude::*;
//! use std::sync::Arc;
//!
//! # fn main() -> Result<()> {
//! let store = MemoryStore::new()
//!     .with_value("pulumi:foo:a", "42")
//!     .with_value("pulumi:foo:verbose", "True");
//!
//! let config = ConfigBag::new("pulumi:foo", Arc::new(store))?;
//!
//! assert_eq!(config.require_int("a")?, 42);
//! assert_eq!(config.get_bool("verbose")?, Some(true));
//! assert_eq!(config.get("b"), None);
//!
//! let err = config.require("b").unwrap_err();
//! assert_eq!(err.key(), Some("pulumi:foo:b"));
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::adapters::{LayeredStore, MemoryStore};
    pub use crate::domain::{ConfigBag, ConfigError, ConfigKey, ConfigValue, Result, ValueType};
    pub use crate::ports::ConfigStore;

    #[cfg(feature = "env")]
    pub use crate::adapters::EnvVarStore;
}
