//! Index integration errors.

use super::error_code::{self, VecsqlErrorCode};
use super::{CodecError, EngineError};

/// Errors raised while creating, opening or writing a vector index.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("Unknown indexing method: {method}")]
    UnknownIndexMethod { method: String },

    #[error("Only single column vector indexes are supported (got {columns})")]
    UnsupportedIndexShape { columns: usize },

    #[error("Invalid vector type: {declared}")]
    InvalidVectorType { declared: String },

    #[error("failed to open vector index {index}: {source}")]
    OpenFailure {
        index: String,
        #[source]
        source: EngineError,
    },

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("search for {k} neighbours on {index} exceeds index.max_search_k ({max})")]
    SearchLimitExceeded { index: String, k: usize, max: usize },

    #[error("shadow storage error for {index}: {message}")]
    Storage { index: String, message: String },

    #[error(transparent)]
    Codec(#[from] CodecError),
}

impl IndexError {
    /// The engine status carried by this error, if it came from the engine.
    pub fn engine_status(&self) -> Option<i32> {
        match self {
            Self::OpenFailure { source, .. } => Some(source.code),
            Self::Engine(e) => Some(e.code),
            _ => None,
        }
    }
}

impl VecsqlErrorCode for IndexError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownIndexMethod { .. } => error_code::UNKNOWN_INDEX_METHOD,
            Self::UnsupportedIndexShape { .. } => error_code::UNSUPPORTED_INDEX_SHAPE,
            Self::InvalidVectorType { .. } => error_code::INVALID_VECTOR_TYPE,
            Self::OpenFailure { .. } => error_code::INDEX_OPEN_FAILURE,
            Self::Engine(e) => e.error_code(),
            Self::SearchLimitExceeded { .. } => error_code::SEARCH_LIMIT_EXCEEDED,
            Self::Storage { .. } => error_code::STORAGE_ERROR,
            Self::Codec(e) => e.error_code(),
        }
    }
}
