//! Subscriber installation for processes that embed vecsql.

use std::io;
use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};

static INIT: Once = Once::new();

/// Install a stderr subscriber for the vecsql crates.
///
/// vecsql usually lives inside a host that owns stdout (a SQLite shell, a
/// server, a test harness), so events go to stderr. The filter comes from
/// `VECSQL_LOG`, e.g. `VECSQL_LOG=vecsql_index=debug` to watch index
/// create/open/close, and defaults to `vecsql=info`, which matches every
/// `vecsql_*` target.
///
/// Only the first call does anything. If the host has already set a global
/// subscriber, that one stays and vecsql events flow through it.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        let layer = fmt::layer()
            .with_writer(io::stderr)
            .with_target(true)
            .compact();

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(layer)
            .try_init();
    });
}
