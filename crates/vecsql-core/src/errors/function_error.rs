//! Errors raised by the SQL-callable vector functions.

use super::error_code::{self, VecsqlErrorCode};
use super::CodecError;

/// Errors returned by `vector`, `vector_extract` and `vector_distance_cos`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FunctionError {
    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error("vectors must have the same length: {left} != {right}")]
    DimensionMismatch { left: usize, right: usize },
}

impl VecsqlErrorCode for FunctionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Codec(e) => e.error_code(),
            Self::DimensionMismatch { .. } => error_code::DIMENSION_MISMATCH,
        }
    }
}
