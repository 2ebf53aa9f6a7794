// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property-based tests using proptest.
//!
//! These tests check key qualification and coercion over arbitrary inputs.

use configbag::adapters::MemoryStore;
use configbag::domain::{ConfigBag, ConfigError, ValueType};
use proptest::prelude::*;
use std::sync::Arc;

fn bag_with(name: &str, key: &str, value: &str) -> ConfigBag {
    let store = MemoryStore::new().with_value(format!("{}:{}", name, key), value);
    ConfigBag::new(name, Arc::new(store)).unwrap()
}

fn empty_bag(name: &str) -> ConfigBag {
    ConfigBag::new(name, Arc::new(MemoryStore::new())).unwrap()
}

// The fully-qualified key is always name + ":" + key
proptest! {
    #[test]
    fn test_full_key_composition(name in "\\PC+", key in "\\PC*") {
        let bag = empty_bag(&name);
        prop_assert_eq!(bag.full_key(&key).into_string(), format!("{}:{}", name, key));
    }
}

// Absent keys are None for getters and Missing for requirers
proptest! {
    #[test]
    fn test_absent_keys(name in "[a-z:]{1,12}", key in "[a-z]{0,8}") {
        let bag = empty_bag(&name);
        let expected = ConfigError::Missing { key: format!("{}:{}", name, key) };

        prop_assert_eq!(bag.get(&key), None);
        prop_assert_eq!(bag.get_bool(&key).unwrap(), None);
        prop_assert_eq!(bag.get_int(&key).unwrap(), None);
        prop_assert_eq!(bag.get_float(&key).unwrap(), None);
        prop_assert_eq!(bag.require(&key).unwrap_err(), expected.clone());
        prop_assert_eq!(bag.require_bool(&key).unwrap_err(), expected.clone());
        prop_assert_eq!(bag.require_int(&key).unwrap_err(), expected.clone());
        prop_assert_eq!(bag.require_float(&key).unwrap_err(), expected);
    }
}

// Integers survive a trip through their string form
proptest! {
    #[test]
    fn test_int_round_trip(n in prop::num::i64::ANY) {
        let bag = bag_with("ns", "n", &n.to_string());
        prop_assert_eq!(bag.get_int("n").unwrap(), Some(n));
        prop_assert_eq!(bag.require_int("n").unwrap(), n);
    }
}

// Finite floats survive a trip through their string form
proptest! {
    #[test]
    fn test_float_round_trip(f in prop::num::f64::NORMAL | prop::num::f64::ZERO) {
        let bag = bag_with("ns", "f", &f.to_string());
        prop_assert_eq!(bag.get_float("f").unwrap(), Some(f));

        let scientific = bag_with("ns", "f", &format!("{:e}", f));
        prop_assert_eq!(scientific.get_float("f").unwrap(), Some(f));
    }
}

// Non-numeric strings are type mismatches, never absence
proptest! {
    #[test]
    fn test_non_numeric_strings_are_mismatches(s in "[g-z]{1,10}") {
        prop_assume!(!["inf", "nan", "infinity"].contains(&s.to_lowercase().as_str()));
        let bag = bag_with("ns", "v", &s);

        let int_err = bag.get_int("v").unwrap_err();
        prop_assert_eq!(
            int_err,
            ConfigError::TypeMismatch {
                key: "ns:v".to_string(),
                value: s.clone(),
                expected_type: ValueType::Int,
            }
        );
        prop_assert!(bag.get_float("v").unwrap_err().is_type_mismatch());
        prop_assert!(bag.require_float("v").unwrap_err().is_type_mismatch());
    }
}

// Only the four boolean literals are accepted
proptest! {
    #[test]
    fn test_bool_accepts_only_literals(s in "\\PC*") {
        let bag = bag_with("ns", "b", &s);
        let result = bag.get_bool("b");
        match s.as_str() {
            "true" | "True" => {
                prop_assert_eq!(result.unwrap(), Some(true));
            }
            "false" | "False" => {
                prop_assert_eq!(result.unwrap(), Some(false));
            }
            _ => {
                prop_assert!(result.unwrap_err().is_type_mismatch());
            }
        }
    }
}

// Two bags with different names never see each other's values
proptest! {
    #[test]
    fn test_namespaces_are_isolated(key in "[a-z]{1,8}", value in "\\PC*") {
        let store = Arc::new(MemoryStore::new().with_value(format!("a:{}", key), value.clone()));
        let a = ConfigBag::new("a", store.clone()).unwrap();
        let b = ConfigBag::new("b", store).unwrap();

        prop_assert_ne!(a.full_key(&key), b.full_key(&key));
        prop_assert_eq!(a.get(&key), Some(value));
        prop_assert_eq!(b.get(&key), None);
    }
}
