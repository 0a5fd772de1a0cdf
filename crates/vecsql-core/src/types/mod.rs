//! Vector value types.

pub mod vector;
pub mod vector_type;

pub use vector::Vector;
pub use vector_type::VectorType;
