//! Scalar function registration.

use rusqlite::functions::{Context, FunctionFlags};
use rusqlite::Connection;
use tracing::{debug, info};

use vecsql_core::config::FunctionConfig;
use vecsql_core::constants::{FN_VECTOR, FN_VECTOR_DISTANCE_COS, FN_VECTOR_EXTRACT};
use vecsql_core::errors::{FunctionError, VecsqlErrorCode};

use crate::surface;

/// Register `vector`, `vector_extract` and `vector_distance_cos` on `conn`.
///
/// Failures inside a function are reported to SQL as user function errors
/// carrying the error's message.
pub fn register_vector_functions(
    conn: &Connection,
    config: &FunctionConfig,
) -> rusqlite::Result<()> {
    let mut flags = FunctionFlags::SQLITE_UTF8;
    if config.effective_deterministic() {
        flags |= FunctionFlags::SQLITE_DETERMINISTIC;
    }

    conn.create_scalar_function(FN_VECTOR, 1, flags, |ctx: &Context<'_>| {
        surface::to_canonical_blob(ctx.get_raw(0)).map_err(|e| to_sql_error(FN_VECTOR, e))
    })?;
    conn.create_scalar_function(FN_VECTOR_EXTRACT, 1, flags, |ctx: &Context<'_>| {
        surface::to_literal(ctx.get_raw(0)).map_err(|e| to_sql_error(FN_VECTOR_EXTRACT, e))
    })?;
    conn.create_scalar_function(FN_VECTOR_DISTANCE_COS, 2, flags, |ctx: &Context<'_>| {
        surface::cosine_distance_of(ctx.get_raw(0), ctx.get_raw(1))
            .map_err(|e| to_sql_error(FN_VECTOR_DISTANCE_COS, e))
    })?;

    info!(
        deterministic = config.effective_deterministic(),
        "vector functions registered"
    );
    Ok(())
}

fn to_sql_error(function: &'static str, e: FunctionError) -> rusqlite::Error {
    debug!(function, error = %e.coded_string(), "vector function failed");
    rusqlite::Error::UserFunctionError(Box::new(e))
}
