//! Property tests for the callable surface.

use proptest::prelude::*;
use rusqlite::types::ValueRef;

use vecsql_functions::{cosine_distance_of, to_canonical_blob, to_literal};

fn finite_values() -> impl Strategy<Value = Vec<f32>> {
    prop::collection::vec(-1.0e6f32..1.0e6f32, 1..64)
}

proptest! {
    #[test]
    fn blob_and_literal_agree(values in finite_values()) {
        let literal = format!(
            "[{}]",
            values.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(",")
        );
        let blob = to_canonical_blob(ValueRef::Text(literal.as_bytes())).unwrap();
        prop_assert_eq!(blob.len(), values.len() * 4);

        let text = to_literal(ValueRef::Blob(&blob)).unwrap();
        let again = to_canonical_blob(ValueRef::Text(text.as_bytes())).unwrap();
        prop_assert_eq!(again.len(), blob.len());
    }

    #[test]
    fn distance_is_symmetric_and_bounded(
        a in prop::collection::vec(-100.0f32..100.0f32, 8),
        b in prop::collection::vec(-100.0f32..100.0f32, 8),
    ) {
        let lit = |v: &[f32]| format!(
            "[{}]",
            v.iter().map(|x| x.to_string()).collect::<Vec<_>>().join(",")
        );
        let (la, lb) = (lit(&a), lit(&b));
        let ab = cosine_distance_of(ValueRef::Text(la.as_bytes()), ValueRef::Text(lb.as_bytes())).unwrap();
        let ba = cosine_distance_of(ValueRef::Text(lb.as_bytes()), ValueRef::Text(la.as_bytes())).unwrap();
        prop_assert!((ab - ba).abs() < 1e-12);
        prop_assert!((-1e-9..=2.0 + 1e-9).contains(&ab));
    }
}
