//! Property-based tests for the functional and value modules

use crate::functional::prelude::*;
use crate::value::Value;
use proptest::prelude::*;

/// Property-based test generators
pub mod generators {
    use super::*;
    use proptest::collection::{btree_map, vec};

    /// JSON-shaped values, nested a few levels deep
    pub fn json_value() -> impl Strategy<Value = serde_json::Value> {
        let leaf = prop_oneof![
            Just(serde_json::Value::Null),
            any::<bool>().prop_map(serde_json::Value::Bool),
            (-1_000_000i64..1_000_000).prop_map(serde_json::Value::from),
            "[a-z]{0,8}".prop_map(serde_json::Value::String),
        ];
        leaf.prop_recursive(4, 64, 6, |inner| {
            prop_oneof![
                vec(inner.clone(), 0..6).prop_map(serde_json::Value::Array),
                btree_map("[a-z]{1,6}", inner, 0..6)
                    .prop_map(|m| serde_json::Value::Object(m.into_iter().collect())),
            ]
        })
    }

    /// Small integer stages for composition properties
    pub fn int_stage() -> impl Strategy<Value = (u8, i64)> {
        (0u8..4, -50i64..50)
    }

    pub fn apply_stage((op, k): (u8, i64), x: i64) -> i64 {
        match op {
            0 => x.wrapping_add(k),
            1 => x.wrapping_mul(k),
            2 => x.wrapping_sub(k),
            _ => x ^ k,
        }
    }
}

#[cfg(test)]
mod property_tests {
    use super::generators::*;
    use super::*;
    use proptest::collection::vec;
    use proptest::proptest;

    proptest! {
        /// pipe! agrees with writing the calls out by hand
        #[test]
        fn pipe_matches_manual_nesting(x in -1000i64..1000, a in int_stage(), b in int_stage(), c in int_stage()) {
            let composed = pipe!(
                move |n: i64| apply_stage(a, n),
                move |n: i64| apply_stage(b, n),
                move |n: i64| apply_stage(c, n),
            );
            let manual = apply_stage(c, apply_stage(b, apply_stage(a, x)));
            prop_assert_eq!(composed(x), manual);
        }

        /// A single-stage pipe is the stage itself
        #[test]
        fn single_stage_pipe_is_the_stage(x in any::<i64>(), a in int_stage()) {
            let composed = pipe!(move |n: i64| apply_stage(a, n));
            prop_assert_eq!(composed(x), apply_stage(a, x));
        }

        /// A runtime chain agrees with pipe! over the same stages
        #[test]
        fn chain_matches_pipe(x in -1000i64..1000, stages in vec(int_stage(), 1..8)) {
            let mut iter = stages.iter().copied();
            let first = iter.next().unwrap();
            let mut chain = Chain::from_stage(move |n: i64| apply_stage(first, n));
            for stage in iter {
                chain.push(move |n| apply_stage(stage, n));
            }
            let expected = stages.iter().fold(x, |acc, &s| apply_stage(s, acc));
            prop_assert_eq!(chain.apply(x), expected);
        }

        /// Test that composition is associative
        #[test]
        fn composition_is_associative(x in 0i32..100) {
            let f = |n: i32| n + 1;
            let g = |n: i32| n * 2;
            let h = |n: i32| n - 5;

            let result1 = forward_compose(forward_compose(f, g), h)(x);
            let result2 = forward_compose(f, forward_compose(g, h))(x);

            prop_assert_eq!(result1, result2);
        }

        /// Test that identity is the identity for composition
        #[test]
        fn identity_is_composition_identity(x in 0i32..1000) {
            let f = |n: i32| n * 3 + 7;

            prop_assert_eq!(pipe!(identity::<i32>, f)(x), f(x));
            prop_assert_eq!(pipe!(f, identity::<i32>)(x), f(x));
        }

        /// zip stops at the shorter input and keeps pairs aligned
        #[test]
        fn zip_truncates_to_shorter(a in vec(any::<u16>(), 0..20), b in vec(".{0,3}", 0..20)) {
            let zipped = zip(a.clone(), b.clone());
            prop_assert_eq!(zipped.len(), a.len().min(b.len()));
            for (i, (x, y)) in zipped.into_iter().enumerate() {
                prop_assert_eq!(x, a[i]);
                prop_assert_eq!(&y, &b[i]);
            }
        }

        /// JSON converts into a Value and back without loss
        #[test]
        fn json_round_trips_through_value(json in json_value()) {
            let value = Value::from(json.clone());
            prop_assert_eq!(value.to_json().unwrap(), json);
        }
    }
}
