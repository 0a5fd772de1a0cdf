//! VecsqlErrorCode trait for host-facing error reporting.

/// Trait giving every vecsql error a stable, machine-readable code.
/// Hosts map these onto their own status reporting; the SQL surface uses
/// [`VecsqlErrorCode::coded_string`] in log events.
pub trait VecsqlErrorCode {
    /// Returns the error code string (e.g., "MALFORMED_LITERAL").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Codec
pub const INVALID_INPUT_KIND: &str = "INVALID_INPUT_KIND";
pub const MALFORMED_LITERAL: &str = "MALFORMED_LITERAL";
pub const ELEMENT_TOO_LONG: &str = "ELEMENT_TOO_LONG";
pub const INVALID_NUMBER: &str = "INVALID_NUMBER";
pub const UNTERMINATED_LITERAL: &str = "UNTERMINATED_LITERAL";
pub const TOO_MANY_DIMENSIONS: &str = "TOO_MANY_DIMENSIONS";
pub const INVALID_BLOB_LENGTH: &str = "INVALID_BLOB_LENGTH";
pub const BUFFER_TOO_SMALL: &str = "BUFFER_TOO_SMALL";
pub const OUT_OF_MEMORY: &str = "OUT_OF_MEMORY";

// Functions
pub const DIMENSION_MISMATCH: &str = "DIMENSION_MISMATCH";

// Index integration
pub const UNKNOWN_INDEX_METHOD: &str = "UNKNOWN_INDEX_METHOD";
pub const UNSUPPORTED_INDEX_SHAPE: &str = "UNSUPPORTED_INDEX_SHAPE";
pub const INVALID_VECTOR_TYPE: &str = "INVALID_VECTOR_TYPE";
pub const INDEX_OPEN_FAILURE: &str = "INDEX_OPEN_FAILURE";
pub const ENGINE_ERROR: &str = "ENGINE_ERROR";
pub const SEARCH_LIMIT_EXCEEDED: &str = "SEARCH_LIMIT_EXCEEDED";
pub const STORAGE_ERROR: &str = "STORAGE_ERROR";

// Config
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
