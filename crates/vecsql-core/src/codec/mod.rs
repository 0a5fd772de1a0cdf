//! Vector codecs.
//!
//! - [`text`]: `[e1, e2, ...]` literals
//! - [`blob`]: raw packed little-endian element arrays (no header)
//! - [`value`]: dispatch on a host SQL value (text, blob, anything else)

pub mod blob;
pub mod text;
pub mod value;

pub use blob::{read_blob, write_blob};
pub use text::{format_literal, parse_literal};
pub use value::parse_value;
