//! Configuration system for vecsql.
//! TOML-based, layered resolution: env > project > user > defaults.

pub mod function_config;
pub mod index_config;
pub mod vecsql_config;

pub use function_config::FunctionConfig;
pub use index_config::IndexConfig;
pub use vecsql_config::VecsqlConfig;
