//! Shared constants for vecsql.

/// vecsql version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum number of dimensions a vector may hold.
pub const MAX_DIMENSIONS: usize = 16_000;

/// Capacity of the per-element scratch buffer used while parsing a literal.
pub const MAX_ELEMENT_CHARS: usize = 1024;

/// Suffix appended to an index name to form its shadow table.
pub const DEFAULT_SHADOW_SUFFIX: &str = "_shadow";

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "VECSQL_LOG";

/// Filter used when `VECSQL_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "vecsql=info";

// ---- SQL function names ----

/// `vector(X)`: literal or blob to canonical blob.
pub const FN_VECTOR: &str = "vector";

/// `vector_extract(X)`: literal or blob to literal text.
pub const FN_VECTOR_EXTRACT: &str = "vector_extract";

/// `vector_distance_cos(X, Y)`: cosine distance.
pub const FN_VECTOR_DISTANCE_COS: &str = "vector_distance_cos";

// ---- Index operator tokens ----

/// Operator token accepted in `USING` for cosine indexes.
pub const OP_DISKANN_COSINE: &str = "diskann_cosine_ops";

/// Short alias of [`OP_DISKANN_COSINE`].
pub const OP_COSINE: &str = "cosine";
