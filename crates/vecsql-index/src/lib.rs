//! # vecsql-index
//!
//! Maps host index events (DDL create, cursor open/close, row insert) onto
//! an approximate-nearest-neighbour engine reached through the
//! [`AnnEngine`]/[`AnnIndex`] contract.
//!
//! [`FlatEngine`] is an exact, brute-force implementation of that contract
//! persisting into the index's shadow table.

pub mod definition;
pub mod engine;
pub mod flat;
pub mod integration;
pub mod shadow;

pub use definition::{IndexColumn, IndexDefinition, VectorIndexSpec};
pub use engine::{AnnEngine, AnnIndex};
pub use flat::FlatEngine;
pub use integration::{VectorIndexCursor, VectorIndexer};
