//! Shadow storage: the per-index table an engine keeps its structures in.

use rusqlite::{params, Connection};

use vecsql_core::errors::IndexError;

/// Quote an SQL identifier, doubling embedded quotes.
pub fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Create the shadow table for `index` if it does not exist yet.
///
/// The table holds opaque binary payloads: `(data BLOB)` keyed by rowid.
pub fn provision(conn: &Connection, index: &str, table: &str) -> Result<(), IndexError> {
    let sql = format!(
        "CREATE TABLE IF NOT EXISTS {} (data BLOB)",
        quote_identifier(table)
    );
    conn.execute_batch(&sql).map_err(|e| IndexError::Storage {
        index: index.to_string(),
        message: e.to_string(),
    })
}

/// Whether a table with this exact name exists in the main schema.
pub fn table_exists(conn: &Connection, table: &str) -> Result<bool, rusqlite::Error> {
    conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1)",
        params![table],
        |row| row.get(0),
    )
}
