//! Top-level vecsql configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{FunctionConfig, IndexConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`VECSQL_*`)
/// 2. Project config (`vecsql.toml` in project root)
/// 3. User config (`~/.vecsql/config.toml`)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct VecsqlConfig {
    pub index: IndexConfig,
    pub functions: FunctionConfig,
}

impl VecsqlConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Lowest priority: user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                Self::merge_toml_file(&mut config, &user_config_path)?;
            }
        }

        let project_config_path = root.join("vecsql.toml");
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &VecsqlConfig) -> Result<(), ConfigError> {
        if let Some(ref suffix) = config.index.shadow_suffix {
            if suffix.is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "index.shadow_suffix".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
            if !suffix.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                return Err(ConfigError::ValidationFailed {
                    field: "index.shadow_suffix".to_string(),
                    message: "must contain only ASCII letters, digits and '_'".to_string(),
                });
            }
        }
        if config.index.max_search_k == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "index.max_search_k".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Returns the user config path: `~/.vecsql/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".vecsql").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut VecsqlConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: VecsqlConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a value.
    fn merge(base: &mut VecsqlConfig, other: &VecsqlConfig) {
        if other.index.shadow_suffix.is_some() {
            base.index.shadow_suffix = other.index.shadow_suffix.clone();
        }
        if other.index.max_search_k.is_some() {
            base.index.max_search_k = other.index.max_search_k;
        }
        if other.functions.deterministic.is_some() {
            base.functions.deterministic = other.functions.deterministic;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `VECSQL_INDEX_SHADOW_SUFFIX`, `VECSQL_INDEX_MAX_SEARCH_K`, etc.
    fn apply_env_overrides(config: &mut VecsqlConfig) {
        if let Ok(val) = std::env::var("VECSQL_INDEX_SHADOW_SUFFIX") {
            config.index.shadow_suffix = Some(val);
        }
        if let Ok(val) = std::env::var("VECSQL_INDEX_MAX_SEARCH_K") {
            if let Ok(v) = val.parse::<u32>() {
                config.index.max_search_k = Some(v);
            }
        }
        if let Ok(val) = std::env::var("VECSQL_FUNCTIONS_DETERMINISTIC") {
            if let Ok(v) = val.parse::<bool>() {
                config.functions.deterministic = Some(v);
            }
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
