//! Decode a host SQL value into a vector.

use rusqlite::types::ValueRef;

use crate::errors::CodecError;
use crate::types::{Vector, VectorType};

use super::{blob, text};

/// Decode text (as a literal) or a blob (as raw elements) into a freshly
/// allocated, owned vector. Any other value kind fails before parsing.
pub fn parse_value(vector_type: VectorType, value: ValueRef<'_>) -> Result<Vector<'static>, CodecError> {
    match value {
        ValueRef::Text(t) => text::parse_literal(vector_type, t),
        ValueRef::Blob(b) => blob::read_blob(vector_type, b),
        ValueRef::Null => Err(CodecError::InvalidInputKind { kind: "NULL" }),
        ValueRef::Integer(_) => Err(CodecError::InvalidInputKind { kind: "INTEGER" }),
        ValueRef::Real(_) => Err(CodecError::InvalidInputKind { kind: "REAL" }),
    }
}
