//! Property tests over generated value trees and digests.

use objecthash::{hash, normalize_float, Digest, Value};
use proptest::collection::{btree_map, vec};
use proptest::prelude::*;

/// Strategy for value trees of bounded depth and width.
fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        (-1.0e12f64..1.0e12).prop_map(Value::Float),
        "[a-zA-Z0-9 _-]{0,12}".prop_map(Value::Str),
    ];
    leaf.prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            vec(inner.clone(), 0..4).prop_map(Value::List),
            btree_map("[a-zA-Z0-9_]{1,8}", inner, 0..4).prop_map(Value::Dict),
        ]
    })
}

proptest! {
    #[test]
    fn hex_round_trip(bytes in any::<[u8; 32]>()) {
        let digest = Digest::from(bytes);
        prop_assert_eq!(Digest::from_hex(&digest.to_hex()).unwrap(), digest);
        prop_assert_eq!(digest.to_hex().len(), 64);
    }

    #[test]
    fn hashing_is_deterministic(value in arb_value()) {
        prop_assert_eq!(hash(&value).unwrap(), hash(&value).unwrap());
    }

    #[test]
    fn clone_hashes_identically(value in arb_value()) {
        let copy = value.clone();
        prop_assert_eq!(hash(&value).unwrap(), hash(&copy).unwrap());
    }

    #[test]
    fn digest_order_matches_hex_order(a in any::<[u8; 32]>(), b in any::<[u8; 32]>()) {
        let (da, db) = (Digest::from(a), Digest::from(b));
        prop_assert_eq!(da.cmp(&db), da.to_hex().cmp(&db.to_hex()));
    }

    #[test]
    fn normalize_float_is_total_over_finite(f in proptest::num::f64::NORMAL | proptest::num::f64::SUBNORMAL | proptest::num::f64::ZERO) {
        let encoded = normalize_float(f).unwrap();
        prop_assert!(encoded.contains(':'));
        prop_assert_eq!(normalize_float(f).unwrap(), encoded);
    }

    #[test]
    fn list_wrapping_changes_digest(value in arb_value()) {
        let wrapped = Value::List(vec![value.clone()]);
        prop_assert_ne!(hash(&wrapped).unwrap(), hash(&value).unwrap());
    }
}
