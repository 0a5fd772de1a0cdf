//! Codec errors: literal and blob decoding/encoding.

use super::error_code::{self, VecsqlErrorCode};

/// Errors that can occur while decoding or encoding a vector.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    #[error("invalid vector: not a text or blob type ({kind})")]
    InvalidInputKind { kind: &'static str },

    #[error("invalid vector: doesn't start with '['")]
    MalformedLiteral,

    #[error("float too big while parsing vector: {prefix}... (max {max} chars)")]
    ElementTooLong { prefix: String, max: usize },

    #[error("invalid number: {literal}")]
    InvalidNumber { literal: String },

    #[error("malformed vector, doesn't end with ']'")]
    UnterminatedLiteral,

    #[error("vector is larger than the maximum: ({max})")]
    TooManyDimensions { max: usize },

    #[error("invalid vector blob: {len} bytes is not a multiple of {element_size}")]
    InvalidBlobLength { len: usize, element_size: usize },

    #[error("blob buffer too small: need {required} bytes, have {available}")]
    BufferTooSmall { required: usize, available: usize },

    #[error("out of memory allocating {bytes} bytes for vector")]
    OutOfMemory { bytes: usize },
}

impl VecsqlErrorCode for CodecError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidInputKind { .. } => error_code::INVALID_INPUT_KIND,
            Self::MalformedLiteral => error_code::MALFORMED_LITERAL,
            Self::ElementTooLong { .. } => error_code::ELEMENT_TOO_LONG,
            Self::InvalidNumber { .. } => error_code::INVALID_NUMBER,
            Self::UnterminatedLiteral => error_code::UNTERMINATED_LITERAL,
            Self::TooManyDimensions { .. } => error_code::TOO_MANY_DIMENSIONS,
            Self::InvalidBlobLength { .. } => error_code::INVALID_BLOB_LENGTH,
            Self::BufferTooSmall { .. } => error_code::BUFFER_TOO_SMALL,
            Self::OutOfMemory { .. } => error_code::OUT_OF_MEMORY,
        }
    }
}
