//! TOML configuration for default chunk sizing.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::types::{ChunkError, ChunkResult, ChunkSizeSpec};

/// Environment variable naming a configuration file.
pub const CONFIG_ENV_VAR: &str = "FITSIO_CHUNKED_CONFIG";

/// Default chunk sizing, typically read from a `chunking.toml`.
///
/// ```toml
/// chunk_size = 1000
/// memory_budget_mb = 512
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChunkingConfig {
    /// Explicit rows per chunk.
    #[serde(default)]
    pub chunk_size: Option<usize>,
    /// Memory budget in megabytes.
    #[serde(default)]
    pub memory_budget_mb: Option<f64>,
}

impl ChunkingConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(text: &str) -> ChunkResult<Self> {
        toml::from_str(text).map_err(|e| ChunkError::Config(e.to_string()))
    }

    /// Layer explicit overrides on top of this configuration.
    pub fn with_overrides(
        &self,
        chunk_size: Option<usize>,
        memory_budget_mb: Option<f64>,
    ) -> Self {
        // Either override replaces both configured values.
        if chunk_size.is_some() || memory_budget_mb.is_some() {
            Self {
                chunk_size,
                memory_budget_mb,
            }
        } else {
            self.clone()
        }
    }

    /// Chunk-size request described by this configuration.
    pub fn size_spec(&self) -> ChunkResult<ChunkSizeSpec> {
        ChunkSizeSpec::from_options(self.chunk_size, self.memory_budget_mb)
    }
}

/// Read and parse a configuration file.
pub fn load_config(path: &Path) -> ChunkResult<ChunkingConfig> {
    let text = std::fs::read_to_string(path)?;
    let config = ChunkingConfig::from_toml_str(&text)?;
    tracing::debug!("Loaded chunking config from {}", path.display());
    Ok(config)
}

/// Pick the configuration file: explicit path, else the environment variable.
pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(PathBuf::from(path));
    }
    std::env::var_os(CONFIG_ENV_VAR)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}
