//! Vector index configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_SHADOW_SUFFIX;

/// Configuration for the index integration layer.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct IndexConfig {
    /// Suffix appended to an index name to name its shadow table.
    /// Default: `_shadow`.
    pub shadow_suffix: Option<String>,
    /// Largest K a single search may request. Unset means no limit; a
    /// search above the limit is rejected, never truncated.
    pub max_search_k: Option<u32>,
}

impl IndexConfig {
    /// Returns the effective shadow table suffix.
    pub fn effective_shadow_suffix(&self) -> &str {
        self.shadow_suffix.as_deref().unwrap_or(DEFAULT_SHADOW_SUFFIX)
    }

    /// Returns the search limit, if one is configured.
    pub fn effective_max_search_k(&self) -> Option<usize> {
        self.max_search_k.map(|k| k as usize)
    }

    /// Shadow table name for the given index.
    pub fn shadow_table_name(&self, index_name: &str) -> String {
        format!("{index_name}{}", self.effective_shadow_suffix())
    }
}
