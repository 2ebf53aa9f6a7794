// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! The only port is the read interface of the external configuration store.

pub mod store;

pub use store::ConfigStore;
