//! SQL function registration configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the SQL-callable vector functions.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FunctionConfig {
    /// Register functions as deterministic. Default: true.
    pub deterministic: Option<bool>,
}

impl FunctionConfig {
    /// Returns whether functions are registered as deterministic.
    pub fn effective_deterministic(&self) -> bool {
        self.deterministic.unwrap_or(true)
    }
}
