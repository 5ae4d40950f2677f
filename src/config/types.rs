//! Configuration Types
//!
//! All configuration structures with sensible defaults. Supports global
//! (~/.config/docsift/) and project (.docsift.toml) level configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::scan::{DEFAULT_MAX_FILE_SIZE, DEFAULT_SKIP_DIRS};
use crate::render::OutputFormat;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Extraction settings
    pub extract: ExtractConfig,

    /// File scanning settings
    pub scan: ScanConfig,

    /// Output settings
    pub output: OutputConfig,
}

impl Config {
    /// Validate configuration values are within acceptable ranges.
    pub fn validate(&self) -> crate::types::Result<()> {
        if self.scan.max_file_size == 0 {
            return Err(crate::types::DocError::Config(
                "scan.max_file_size must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ExtractConfig {
    /// Drop functions and classes without docstrings
    pub ignore_undocumented: bool,

    /// Root directory anchoring canonical dotted names
    pub root: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Glob patterns excluded from directory walks
    pub exclude: Vec<String>,

    /// Maximum file size considered for extraction (bytes)
    pub max_file_size: u64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            exclude: DEFAULT_SKIP_DIRS
                .iter()
                .map(|d| format!("**/{}/**", d))
                .collect(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format when none is given on the command line
    pub format: OutputFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_zero_max_file_size_rejected() {
        let mut config = Config::default();
        config.scan.max_file_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_excludes_cover_python_dirs() {
        let config = ScanConfig::default();
        assert!(config.exclude.iter().any(|p| p.contains("__pycache__")));
        assert!(config.exclude.iter().any(|p| p.contains(".venv")));
    }
}
