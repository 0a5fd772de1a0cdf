//! Host-facing index lifecycle: create, open, insert, search, close.
//!
//! Engine statuses are propagated unchanged and nothing is retried here.

use rusqlite::types::ValueRef;
use rusqlite::Connection;
use tracing::{debug, info, warn};

use vecsql_core::config::IndexConfig;
use vecsql_core::errors::IndexError;
use vecsql_core::{Vector, VectorType};

use crate::definition::{self, IndexDefinition, VectorIndexSpec};
use crate::engine::{AnnEngine, AnnIndex};
use crate::shadow;

/// Drives an [`AnnEngine`] on behalf of the host.
pub struct VectorIndexer<'e> {
    engine: &'e dyn AnnEngine,
    config: IndexConfig,
}

impl<'e> VectorIndexer<'e> {
    pub fn new(engine: &'e dyn AnnEngine, config: IndexConfig) -> Self {
        Self { engine, config }
    }

    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// Handle `CREATE INDEX`.
    ///
    /// The definition is fully validated before the shadow table is
    /// provisioned, so a rejected definition leaves the schema untouched.
    /// The engine is handed the provisioned table name and stores its data
    /// there.
    pub fn create(
        &self,
        conn: &Connection,
        def: &IndexDefinition,
    ) -> Result<VectorIndexSpec, IndexError> {
        let spec = definition::validate(def).inspect_err(|e| {
            debug!(index = %def.name, error = %e, "vector index definition rejected");
        })?;

        let shadow_table = self.config.shadow_table_name(&spec.name);
        shadow::provision(conn, &spec.name, &shadow_table)?;

        self.engine
            .create(conn, &spec.name, &shadow_table, spec.dims, spec.op)
            .inspect_err(|e| {
                warn!(index = %spec.name, code = e.code, error = %e, "ANN engine create failed");
            })?;

        info!(
            index = %spec.name,
            column = %spec.column,
            dims = spec.dims,
            op = spec.op.name(),
            shadow = %shadow_table,
            "vector index created"
        );
        Ok(spec)
    }

    /// Handle a cursor open on `name`.
    pub fn open<'c>(
        &self,
        conn: &'c Connection,
        name: &str,
    ) -> Result<VectorIndexCursor<'c>, IndexError> {
        let handle = self.engine.open(conn, name).map_err(|source| {
            warn!(index = %name, code = source.code, error = %source, "ANN engine open failed");
            IndexError::OpenFailure {
                index: name.to_string(),
                source,
            }
        })?;
        debug!(index = %name, "vector index cursor opened");
        Ok(VectorIndexCursor {
            index: name.to_string(),
            handle: Some(handle),
            max_search_k: self.config.effective_max_search_k(),
        })
    }
}

/// A cursor owning one engine handle.
///
/// The handle is released exactly once, when the cursor is closed or
/// dropped.
pub struct VectorIndexCursor<'c> {
    index: String,
    /// Only `None` while `Drop` runs.
    handle: Option<Box<dyn AnnIndex + 'c>>,
    max_search_k: Option<usize>,
}

impl<'c> VectorIndexCursor<'c> {
    pub fn index_name(&self) -> &str {
        &self.index
    }

    /// Handle a row insert. `row` is `(vector blob, rowid integer)`.
    ///
    /// The vector is a borrowed view over the blob bytes; nothing is copied.
    ///
    /// # Panics
    ///
    /// Panics if `row` does not have exactly two fields, or if they are not
    /// a blob and an integer. Column types are enforced by the host schema
    /// before a row reaches the index.
    pub fn insert(&mut self, row: &[ValueRef<'_>]) -> Result<(), IndexError> {
        let [vector, rowid] = row else {
            panic!("vector index row must have 2 fields, got {}", row.len());
        };
        let ValueRef::Blob(bytes) = *vector else {
            panic!("vector index column must be a blob, got {:?}", vector.data_type());
        };
        let ValueRef::Integer(rowid) = *rowid else {
            panic!("vector index rowid must be an integer, got {:?}", rowid.data_type());
        };

        let view = Vector::from_blob(VectorType::Float32, bytes)?;
        self.insert_vector(&view, rowid)
    }

    /// Insert an already-decoded vector.
    pub fn insert_vector(&mut self, vector: &Vector<'_>, rowid: i64) -> Result<(), IndexError> {
        let index = &self.index;
        let handle = Self::live(&mut self.handle);
        handle.insert(vector, rowid).map_err(|e| {
            warn!(index = %index, rowid, code = e.code, error = %e, "ANN engine insert failed");
            IndexError::Engine(e)
        })
    }

    /// Up to `k` nearest row ids, nearest first. Fewer than `k` come back
    /// only when the index holds fewer entries.
    ///
    /// When `index.max_search_k` is configured, a larger `k` is rejected
    /// with [`IndexError::SearchLimitExceeded`] rather than truncated.
    pub fn search(&mut self, query: &Vector<'_>, k: usize) -> Result<Vec<i64>, IndexError> {
        if let Some(max) = self.max_search_k {
            if k > max {
                return Err(IndexError::SearchLimitExceeded {
                    index: self.index.clone(),
                    k,
                    max,
                });
            }
        }
        if k == 0 {
            return Ok(Vec::new());
        }
        let index = &self.index;
        let handle = Self::live(&mut self.handle);
        handle.search(query, k).map_err(|e| {
            warn!(index = %index, k, code = e.code, error = %e, "ANN engine search failed");
            IndexError::Engine(e)
        })
    }

    /// Close the cursor, releasing its engine handle.
    pub fn close(self) {
        drop(self);
    }

    fn live<'h>(handle: &'h mut Option<Box<dyn AnnIndex + 'c>>) -> &'h mut (dyn AnnIndex + 'c) {
        handle
            .as_deref_mut()
            .expect("cursor handle is present until drop")
    }
}

impl Drop for VectorIndexCursor<'_> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.close();
            debug!(index = %self.index, "vector index cursor closed");
        }
    }
}
