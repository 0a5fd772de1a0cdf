//! Pure implementations of the three vector functions.
//!
//! Inputs may be a literal (text) or a canonical blob. Every input is
//! decoded into a fresh owned vector, dropped on return.

use rusqlite::types::ValueRef;

use vecsql_core::codec::parse_value;
use vecsql_core::errors::FunctionError;
use vecsql_core::{cosine_distance, VectorType};

/// `vector(X)`: the canonical blob encoding of `x`.
pub fn to_canonical_blob(x: ValueRef<'_>) -> Result<Vec<u8>, FunctionError> {
    let v = parse_value(VectorType::Float32, x)?;
    Ok(v.to_blob())
}

/// `vector_extract(X)`: the literal text of `x`.
pub fn to_literal(x: ValueRef<'_>) -> Result<String, FunctionError> {
    let v = parse_value(VectorType::Float32, x)?;
    Ok(v.to_literal())
}

/// `vector_distance_cos(X, Y)`: cosine distance between `x` and `y`.
pub fn cosine_distance_of(x: ValueRef<'_>, y: ValueRef<'_>) -> Result<f64, FunctionError> {
    let a = parse_value(VectorType::Float32, x)?;
    let b = parse_value(VectorType::Float32, y)?;
    if a.dims() != b.dims() {
        return Err(FunctionError::DimensionMismatch {
            left: a.dims(),
            right: b.dims(),
        });
    }
    Ok(cosine_distance(&a, &b))
}
