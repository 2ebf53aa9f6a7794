// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing configuration store implementations.
//!
//! Each adapter implements the `ConfigStore` port so it can back a
//! [`ConfigBag`](crate::domain::ConfigBag).

#[cfg(feature = "env")]
pub mod env_var;
pub mod layered;
pub mod memory;

#[cfg(feature = "env")]
pub use env_var::{EnvVarStore, DEFAULT_ENV_PREFIX};
pub use layered::LayeredStore;
pub use memory::MemoryStore;
