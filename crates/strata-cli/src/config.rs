//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use strata_core::{Objective, PartitionConfig};

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Partitioning defaults
    #[serde(default)]
    pub partition: PartitionConfig,

    /// Input preprocessing
    #[serde(default)]
    pub input: InputSettings,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Log filter used when neither RUST_LOG nor -v is given
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Input preprocessing settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputSettings {
    /// Round values to this many decimal places before deduplication
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub round_decimals: Option<u32>,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".strata").join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the default path is used if
    /// present, otherwise built-in defaults apply.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match Self::path() {
                Ok(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config: Config = toml::from_str(&contents)?;
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Partition settings with command-line overrides applied.
    ///
    /// `minimize` lists zero-based feature indices; when non-empty it replaces
    /// the configured objectives for points of `dimension` features.
    pub fn partition_config(&self, dimension: usize, minimize: &[usize], no_dedup: bool) -> Result<PartitionConfig> {
        let mut config = self.partition.clone();
        if !minimize.is_empty() {
            config.objectives = objectives_for(dimension, minimize)?;
        }
        if no_dedup {
            config.dedup = false;
        }
        Ok(config)
    }
}

/// Build a per-feature objective list that minimizes the given indices.
pub fn objectives_for(dimension: usize, minimize: &[usize]) -> Result<Vec<Objective>> {
    let mut objectives = vec![Objective::Maximize; dimension];
    for &index in minimize {
        let slot = objectives.get_mut(index).ok_or_else(|| {
            CliError::InvalidInput(format!(
                "Feature index {} is out of range for {} feature(s)",
                index, dimension
            ))
        })?;
        *slot = Objective::Minimize;
    }
    Ok(objectives)
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
            log_level: default_log_level(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_log_level() -> String {
    "warn".to_string()
}
