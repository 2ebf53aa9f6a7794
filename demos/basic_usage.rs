// SPDX-License-Identifier: MIT OR Apache-2.0

//! Basic usage example for configuration bags.
//!
//! This example demonstrates:
//! - Layering explicit values over environment variables
//! - Reading optional and required values
//! - Type coercion (string, int, bool, float)
//! - Telling missing values apart from malformed ones
//!
//! To run this example:
//! ```bash
//! # Set some environment variables
//! export PULUMI_CONFIG_DEMO_PORT="5432"
//! export PULUMI_CONFIG='{"demo:debug": "True", "demo:timeout": "30.5"}'
//!
//! # Run the example
//! cargo run --example basic_usage
//! ```

use configbag::prelude::*;
use std::sync::Arc;

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    println!("=== Configuration Bags: Basic Usage ===\n");

    let explicit = MemoryStore::new().with_value("demo:name", "DemoApp");
    let store = LayeredStore::new()
        .with_store(Arc::new(explicit))
        .with_store(Arc::new(EnvVarStore::new()));

    let config = ConfigBag::new("demo", Arc::new(store))?;
    println!("Bag '{}' created.\n", config.name());

    println!("--- Strings ---");
    println!("name = {}", config.require("name")?);

    println!("\n--- Integers ---");
    match config.get_int("port")? {
        Some(port) => println!("port = {}", port),
        None => println!("port not set ({} missing)", config.full_key("port")),
    }

    println!("\n--- Booleans ---");
    match config.get_bool("debug") {
        Ok(Some(debug)) => println!("debug = {}", debug),
        Ok(None) => println!("debug not set"),
        Err(e) => println!("debug is malformed: {}", e),
    }

    println!("\n--- Floats ---");
    match config.get_float("timeout") {
        Ok(Some(timeout)) => println!("timeout = {}", timeout),
        Ok(None) => println!("timeout not set"),
        Err(e) => println!("timeout is malformed: {}", e),
    }

    println!("\n--- Required values ---");
    if let Err(e) = config.require("region") {
        println!("{}", e);
    }

    Ok(())
}
