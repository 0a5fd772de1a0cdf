//! Status reported by an ANN engine.

use rusqlite::ffi;

use super::error_code::{self, VecsqlErrorCode};

/// A failure status returned by an ANN engine operation.
///
/// `code` is a SQLite result code (`SQLITE_ERROR`, `SQLITE_MISMATCH`, ...)
/// and is handed to the host unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} (code {code})")]
pub struct EngineError {
    pub code: i32,
    pub message: String,
}

impl EngineError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Generic `SQLITE_ERROR` failure.
    pub fn generic(message: impl Into<String>) -> Self {
        Self::new(ffi::SQLITE_ERROR, message)
    }

    /// `SQLITE_MISMATCH`: vector shape does not fit the index.
    pub fn mismatch(message: impl Into<String>) -> Self {
        Self::new(ffi::SQLITE_MISMATCH, message)
    }

    /// `SQLITE_CONSTRAINT`: conflicting index definition.
    pub fn constraint(message: impl Into<String>) -> Self {
        Self::new(ffi::SQLITE_CONSTRAINT, message)
    }
}

impl From<rusqlite::Error> for EngineError {
    fn from(e: rusqlite::Error) -> Self {
        match &e {
            rusqlite::Error::SqliteFailure(err, _) => Self::new(err.extended_code, e.to_string()),
            _ => Self::generic(e.to_string()),
        }
    }
}

impl VecsqlErrorCode for EngineError {
    fn error_code(&self) -> &'static str {
        error_code::ENGINE_ERROR
    }
}
