//! An open flat index.

use std::cmp::Ordering;

use rusqlite::types::ValueRef;
use rusqlite::{ffi, params, Connection};
use tracing::{debug, trace};

use vecsql_core::errors::EngineError;
use vecsql_core::{Vector, VectorType};

use super::catalog::CatalogEntry;
use crate::engine::AnnIndex;
use crate::shadow::quote_identifier;

/// Handle over one flat index, bound to the connection that opened it.
pub struct FlatIndex<'c> {
    conn: &'c Connection,
    entry: CatalogEntry,
}

impl<'c> FlatIndex<'c> {
    pub(crate) fn new(conn: &'c Connection, entry: CatalogEntry) -> Self {
        Self { conn, entry }
    }

    pub fn entry(&self) -> &CatalogEntry {
        &self.entry
    }

    fn check_dims(&self, vector: &Vector<'_>, what: &str) -> Result<(), EngineError> {
        if vector.dims() != self.entry.dims as usize {
            return Err(EngineError::mismatch(format!(
                "{what} has {} dimensions, index {} expects {}",
                vector.dims(),
                self.entry.name,
                self.entry.dims
            )));
        }
        Ok(())
    }
}

impl AnnIndex for FlatIndex<'_> {
    fn insert(&mut self, vector: &Vector<'_>, rowid: i64) -> Result<(), EngineError> {
        self.check_dims(vector, "vector")?;
        let sql = format!(
            "INSERT OR REPLACE INTO {} (rowid, data) VALUES (?1, ?2)",
            quote_identifier(&self.entry.shadow_table)
        );
        self.conn
            .prepare_cached(&sql)?
            .execute(params![rowid, vector.as_bytes()])?;
        trace!(index = %self.entry.name, rowid, "flat index insert");
        Ok(())
    }

    fn search(&mut self, query: &Vector<'_>, k: usize) -> Result<Vec<i64>, EngineError> {
        self.check_dims(query, "query")?;
        if k == 0 {
            return Ok(Vec::new());
        }

        let sql = format!(
            "SELECT rowid, data FROM {}",
            quote_identifier(&self.entry.shadow_table)
        );
        let mut stmt = self.conn.prepare_cached(&sql)?;
        let mut rows = stmt.query([])?;

        let mut scored: Vec<(f64, i64)> = Vec::new();
        while let Some(row) = rows.next()? {
            let rowid: i64 = row.get(0)?;
            let ValueRef::Blob(bytes) = row.get_ref(1)? else {
                return Err(corrupt_row(&self.entry.name, rowid));
            };
            let stored = Vector::from_blob(VectorType::Float32, bytes)
                .map_err(|_| corrupt_row(&self.entry.name, rowid))?;
            if stored.dims() != query.dims() {
                return Err(corrupt_row(&self.entry.name, rowid));
            }
            scored.push((self.entry.op.distance(query, &stored), rowid));
        }

        scored.sort_by(|a, b| match a.0.total_cmp(&b.0) {
            Ordering::Equal => a.1.cmp(&b.1),
            other => other,
        });
        scored.truncate(k);

        debug!(
            index = %self.entry.name,
            k,
            returned = scored.len(),
            "flat index search"
        );
        Ok(scored.into_iter().map(|(_, rowid)| rowid).collect())
    }

    fn close(self: Box<Self>) {
        debug!(index = %self.entry.name, "flat index closed");
    }
}

fn corrupt_row(index: &str, rowid: i64) -> EngineError {
    EngineError::new(
        ffi::SQLITE_CORRUPT,
        format!("vector index {index}: row {rowid} does not hold a valid vector"),
    )
}
