//! # vecsql-functions
//!
//! The callable surface: `vector(X)`, `vector_extract(X)` and
//! `vector_distance_cos(X, Y)`, as plain functions over host values and as
//! SQLite scalar functions registered on a `rusqlite::Connection`.

pub mod register;
pub mod surface;

pub use register::register_vector_functions;
pub use surface::{cosine_distance_of, to_canonical_blob, to_literal};
