//! Exact, brute-force ANN engine.
//!
//! Vectors live in the index's shadow table as canonical blobs keyed by
//! rowid. Search scans every row and ranks by the index metric. Index
//! parameters are kept in a small catalog table so an index can be reopened
//! from a fresh connection.

mod catalog;
mod index;

use rusqlite::Connection;
use tracing::{debug, info};

use vecsql_core::errors::EngineError;
use vecsql_core::DistanceOp;

use crate::engine::{AnnEngine, AnnIndex};
use crate::shadow::quote_identifier;

pub use catalog::{CatalogEntry, CATALOG_TABLE};
pub use index::FlatIndex;

/// Reference [`AnnEngine`] doing exact search over the shadow table.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatEngine;

impl AnnEngine for FlatEngine {
    fn create(
        &self,
        conn: &Connection,
        name: &str,
        shadow_table: &str,
        dims: u32,
        op: DistanceOp,
    ) -> Result<(), EngineError> {
        catalog::ensure_catalog(conn)?;

        if let Some(existing) = catalog::get(conn, name)? {
            if existing.dims == dims && existing.op == op && existing.shadow_table == shadow_table {
                debug!(index = %name, "flat index already exists");
                return Ok(());
            }
            return Err(EngineError::constraint(format!(
                "vector index {name} already exists with {} dims, metric {} and shadow table {}",
                existing.dims,
                existing.op.name(),
                existing.shadow_table
            )));
        }

        let entry = CatalogEntry {
            name: name.to_string(),
            shadow_table: shadow_table.to_string(),
            dims,
            op,
        };

        // Table and catalog row land together or not at all.
        let tx = conn.unchecked_transaction()?;
        tx.execute_batch(&format!(
            "CREATE TABLE IF NOT EXISTS {} (data BLOB)",
            quote_identifier(&entry.shadow_table)
        ))?;
        catalog::insert(&tx, &entry)?;
        tx.commit()?;

        info!(index = %name, shadow = %shadow_table, dims, op = op.name(), "flat index created");
        Ok(())
    }

    fn open<'c>(
        &self,
        conn: &'c Connection,
        name: &str,
    ) -> Result<Box<dyn AnnIndex + 'c>, EngineError> {
        catalog::ensure_catalog(conn)?;
        let entry = catalog::get(conn, name)?
            .ok_or_else(|| EngineError::generic(format!("no such vector index: {name}")))?;
        Ok(Box::new(FlatIndex::new(conn, entry)))
    }
}
