//! Tests for index definition validation.

use vecsql_core::errors::IndexError;
use vecsql_core::{DistanceOp, VectorType};
use vecsql_index::definition::validate;
use vecsql_index::IndexDefinition;

fn single(ty: &str, op: &str) -> IndexDefinition {
    IndexDefinition::new("idx").column("embedding", ty).using(op)
}

#[test]
fn accepts_cosine_operator_tokens() {
    for op in ["diskann_cosine_ops", "cosine", "COSINE", "DiskANN_Cosine_Ops"] {
        let spec = validate(&single("FLOAT32(128)", op)).unwrap();
        assert_eq!(spec.name, "idx");
        assert_eq!(spec.column, "embedding");
        assert_eq!(spec.vector_type, VectorType::Float32);
        assert_eq!(spec.dims, 128);
        assert_eq!(spec.op, DistanceOp::Cosine);
    }
}

#[test]
fn unknown_operator_is_rejected() {
    let err = validate(&single("FLOAT32(3)", "diskann_euclidean_ops")).unwrap_err();
    match err {
        IndexError::UnknownIndexMethod { method } => assert_eq!(method, "diskann_euclidean_ops"),
        other => panic!("expected UnknownIndexMethod, got {other:?}"),
    }
}

#[test]
fn missing_or_repeated_operator_is_rejected() {
    let none = IndexDefinition::new("idx").column("v", "FLOAT32(3)");
    assert!(matches!(
        validate(&none),
        Err(IndexError::UnknownIndexMethod { .. })
    ));

    let two = single("FLOAT32(3)", "cosine").using("cosine");
    assert!(matches!(
        validate(&two),
        Err(IndexError::UnknownIndexMethod { .. })
    ));
}

#[test]
fn operator_is_checked_before_shape_and_type() {
    let def = IndexDefinition::new("idx")
        .column("a", "TEXT")
        .column("b", "TEXT")
        .using("l2");
    assert!(matches!(
        validate(&def),
        Err(IndexError::UnknownIndexMethod { .. })
    ));
}

#[test]
fn only_single_column_indexes() {
    let none = IndexDefinition::new("idx").using("cosine");
    assert!(matches!(
        validate(&none),
        Err(IndexError::UnsupportedIndexShape { columns: 0 })
    ));

    let two = IndexDefinition::new("idx")
        .column("a", "FLOAT32(3)")
        .column("b", "FLOAT32(3)")
        .using("cosine");
    assert!(matches!(
        validate(&two),
        Err(IndexError::UnsupportedIndexShape { columns: 2 })
    ));
}

#[test]
fn shape_is_checked_before_type() {
    let def = IndexDefinition::new("idx")
        .column("a", "TEXT")
        .column("b", "TEXT")
        .using("cosine");
    assert!(matches!(
        validate(&def),
        Err(IndexError::UnsupportedIndexShape { .. })
    ));
}

#[test]
fn invalid_declared_types() {
    for ty in ["TEXT", "FLOAT32", "FLOAT32(abc)", "FLOAT32(16001)", "BLOB"] {
        match validate(&single(ty, "cosine")) {
            Err(IndexError::InvalidVectorType { declared }) => assert_eq!(declared, ty),
            other => panic!("{ty}: expected InvalidVectorType, got {other:?}"),
        }
    }
}

#[test]
fn error_messages_name_the_problem() {
    let err = validate(&single("FLOAT32(3)", "l2")).unwrap_err();
    assert_eq!(err.to_string(), "Unknown indexing method: l2");

    let err = validate(&single("TEXT", "cosine")).unwrap_err();
    assert_eq!(err.to_string(), "Invalid vector type: TEXT");
}
