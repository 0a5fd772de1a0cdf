//! Error handling for vecsql.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod codec_error;
pub mod config_error;
pub mod engine_error;
pub mod error_code;
pub mod function_error;
pub mod index_error;

pub use codec_error::CodecError;
pub use config_error::ConfigError;
pub use engine_error::EngineError;
pub use error_code::VecsqlErrorCode;
pub use function_error::FunctionError;
pub use index_error::IndexError;
