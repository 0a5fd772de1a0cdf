//! Tests for the vecsql tracing setup.

use std::sync::Mutex;

use vecsql_core::tracing::init_tracing;

/// Serializes tests that touch `VECSQL_LOG`.
static TRACING_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn init_with_filter_from_env() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("VECSQL_LOG", "vecsql_index=debug,vecsql_functions=warn");
    init_tracing();
    std::env::remove_var("VECSQL_LOG");
}

#[test]
fn init_is_idempotent() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    init_tracing();
    init_tracing();
}

#[test]
fn invalid_filter_falls_back_to_default() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("VECSQL_LOG", "[[[not a filter");
    init_tracing();
    std::env::remove_var("VECSQL_LOG");
}
