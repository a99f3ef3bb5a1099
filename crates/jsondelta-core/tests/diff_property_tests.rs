//! Property tests for the diff engine over generated JSON values.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use jsondelta_core::diff::{diff, ValueKind};
use proptest::prelude::*;
use serde_json::{json, Map, Value};

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-1.0e6f64..1.0e6).prop_map(|n| json!(n)),
        "[a-z]{0,4}".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 48, 5, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..5).prop_map(Value::Array),
            prop::collection::btree_map("[a-d]{1,2}", inner, 0..5)
                .prop_map(|m| Value::Object(m.into_iter().collect::<Map<_, _>>())),
        ]
    })
}

fn arb_array() -> impl Strategy<Value = Vec<Value>> {
    prop::collection::vec(arb_json(), 0..6)
}

fn arb_object() -> impl Strategy<Value = Map<String, Value>> {
    prop::collection::btree_map("[a-d]{1,2}", arb_json(), 0..6)
        .prop_map(|m| m.into_iter().collect())
}

proptest! {
    #[test]
    fn prop_diff_is_reflexive(v in arb_json()) {
        prop_assert_eq!(diff(Some(&v), Some(&v)).unwrap(), None);
    }

    #[test]
    fn prop_scalar_or_kind_change_yields_right_value(a in arb_json(), b in arb_json()) {
        let (ka, kb) = (ValueKind::of(&a), ValueKind::of(&b));
        prop_assume!(ka != ValueKind::Null && kb != ValueKind::Null);
        prop_assume!(ka != kb || ka.is_scalar());
        if let Some(delta) = diff(Some(&a), Some(&b)).unwrap() {
            prop_assert_eq!(delta, b);
        }
    }

    #[test]
    fn prop_array_delta_has_max_length(a in arb_array(), b in arb_array()) {
        let expected = a.len().max(b.len());
        let delta = diff(Some(&Value::Array(a)), Some(&Value::Array(b))).unwrap();
        if let Some(delta) = delta {
            let slots = delta.as_array().expect("array delta must be an array");
            prop_assert_eq!(slots.len(), expected);
            prop_assert!(slots.iter().any(|s| !s.is_null()));
        }
    }

    #[test]
    fn prop_object_delta_keys_come_from_inputs(a in arb_object(), b in arb_object()) {
        let delta = diff(
            Some(&Value::Object(a.clone())),
            Some(&Value::Object(b.clone())),
        )
        .unwrap();
        if let Some(delta) = delta {
            let keys = delta.as_object().expect("object delta must be an object");
            prop_assert!(!keys.is_empty());
            for key in keys.keys() {
                prop_assert!(a.contains_key(key) || b.contains_key(key));
            }
        }
    }

    #[test]
    fn prop_symmetric_key_removal_and_addition(a in arb_object(), extra in arb_json()) {
        prop_assume!(!extra.is_null());
        let mut b = a.clone();
        b.insert("zz".to_string(), extra.clone());
        let added = diff(Some(&Value::Object(a.clone())), Some(&Value::Object(b.clone()))).unwrap();
        let removed = diff(Some(&Value::Object(b)), Some(&Value::Object(a))).unwrap();
        prop_assert_eq!(added, Some(json!({"zz": extra.clone()})));
        prop_assert_eq!(removed, Some(json!({"zz": extra})));
    }
}
