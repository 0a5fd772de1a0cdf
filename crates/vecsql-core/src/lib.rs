//! # vecsql-core
//!
//! Foundation crate for vecsql.
//! Defines the vector value, its text and blob codecs, the distance engine,
//! and the errors, config, constants and tracing shared by every other crate.

pub mod codec;
pub mod config;
pub mod constants;
pub mod distance;
pub mod errors;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::VecsqlConfig;
pub use constants::MAX_DIMENSIONS;
pub use distance::{cosine_distance, DistanceOp};
pub use errors::{CodecError, EngineError, FunctionError, IndexError};
pub use types::{Vector, VectorType};
