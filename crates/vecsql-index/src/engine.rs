//! The ANN engine contract.
//!
//! The graph algorithm behind an index is not part of vecsql. An engine
//! exposes five operations: `create` and `open` on [`AnnEngine`], and
//! `insert`, `search` and `close` on the per-cursor [`AnnIndex`] handle it
//! returns. Every failure is an [`EngineError`] carrying a SQLite status
//! code, which the integration layer passes to the host unchanged.

use rusqlite::Connection;

use vecsql_core::{DistanceOp, EngineError, Vector};

/// Factory for per-index handles.
pub trait AnnEngine {
    /// Initialise persistent structures for a new index.
    ///
    /// `shadow_table` is the already-provisioned table the index must keep
    /// its data in; engines never derive a name of their own.
    fn create(
        &self,
        conn: &Connection,
        name: &str,
        shadow_table: &str,
        dims: u32,
        op: DistanceOp,
    ) -> Result<(), EngineError>;

    /// Open a handle on an existing index. The handle may borrow `conn`.
    fn open<'c>(
        &self,
        conn: &'c Connection,
        name: &str,
    ) -> Result<Box<dyn AnnIndex + 'c>, EngineError>;
}

/// An open index handle, owned by exactly one cursor.
pub trait AnnIndex {
    /// Add (or replace) the vector stored for `rowid`.
    fn insert(&mut self, vector: &Vector<'_>, rowid: i64) -> Result<(), EngineError>;

    /// Up to `k` row ids ordered by ascending distance to `query`.
    /// Fewer are returned when the index holds fewer entries. The order of
    /// equal distances is engine-defined.
    fn search(&mut self, query: &Vector<'_>, k: usize) -> Result<Vec<i64>, EngineError>;

    /// Release the handle. Consuming `self` makes a second close impossible.
    fn close(self: Box<Self>);
}
