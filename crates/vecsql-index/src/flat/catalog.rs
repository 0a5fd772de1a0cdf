//! Catalog of flat indexes: one row per index with its parameters.

use rusqlite::{params, Connection, OptionalExtension};

use vecsql_core::errors::EngineError;
use vecsql_core::DistanceOp;

pub const CATALOG_TABLE: &str = "vecsql_flat_catalog";

const CATALOG_SQL: &str = "
CREATE TABLE IF NOT EXISTS vecsql_flat_catalog (
    name         TEXT PRIMARY KEY,
    shadow_table TEXT NOT NULL,
    dims         INTEGER NOT NULL,
    metric       TEXT NOT NULL
) STRICT;
";

/// Persisted parameters of one flat index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: String,
    pub shadow_table: String,
    pub dims: u32,
    pub op: DistanceOp,
}

pub(crate) fn ensure_catalog(conn: &Connection) -> Result<(), EngineError> {
    conn.execute_batch(CATALOG_SQL)?;
    Ok(())
}

pub(crate) fn get(conn: &Connection, name: &str) -> Result<Option<CatalogEntry>, EngineError> {
    let mut stmt = conn.prepare_cached(
        "SELECT name, shadow_table, dims, metric FROM vecsql_flat_catalog WHERE name = ?1",
    )?;
    let row = stmt
        .query_row(params![name], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, i64>(2)?,
                row.get::<_, String>(3)?,
            ))
        })
        .optional()?;

    let Some((name, shadow_table, dims, metric)) = row else {
        return Ok(None);
    };
    let corrupt = |what: &str| {
        EngineError::new(
            rusqlite::ffi::SQLITE_CORRUPT,
            format!("corrupt catalog entry for {name}: {what}"),
        )
    };
    let dims = u32::try_from(dims).map_err(|_| corrupt("dims"))?;
    let op = DistanceOp::from_name(&metric).ok_or_else(|| corrupt("metric"))?;
    Ok(Some(CatalogEntry {
        name,
        shadow_table,
        dims,
        op,
    }))
}

pub(crate) fn insert(conn: &Connection, entry: &CatalogEntry) -> Result<(), EngineError> {
    conn.prepare_cached(
        "INSERT INTO vecsql_flat_catalog (name, shadow_table, dims, metric)
         VALUES (?1, ?2, ?3, ?4)",
    )?
    .execute(params![
        entry.name,
        entry.shadow_table,
        i64::from(entry.dims),
        entry.op.name(),
    ])?;
    Ok(())
}
