//! Partitioning configuration

use serde::{Deserialize, Serialize};

/// Direction in which a feature is considered better
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Objective {
    /// Larger values are better
    #[default]
    Maximize,

    /// Smaller values are better
    Minimize,
}

impl Objective {
    /// Get the objective name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Objective::Maximize => "maximize",
            Objective::Minimize => "minimize",
        }
    }

    /// Parse an objective from a string (accepts `max`/`min` shorthands)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "maximize" | "max" => Some(Objective::Maximize),
            "minimize" | "min" => Some(Objective::Minimize),
            _ => None,
        }
    }
}

/// Configuration for a [`Partitioner`](crate::Partitioner)
///
/// # Examples
///
/// ```
/// use strata_core::{Objective, PartitionConfig};
///
/// // Every feature maximized, duplicates removed
/// let config = PartitionConfig::default();
/// assert!(config.dedup);
///
/// // Second feature is a cost
/// let config = PartitionConfig::with_objectives(vec![Objective::Maximize, Objective::Minimize]);
/// assert_eq!(config.objective(1), Objective::Minimize);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartitionConfig {
    /// Per-feature objectives; empty means every feature is maximized
    #[serde(default)]
    pub objectives: Vec<Objective>,

    /// Remove exact duplicate rows before partitioning
    #[serde(default = "default_dedup")]
    pub dedup: bool,
}

fn default_dedup() -> bool {
    true
}

impl Default for PartitionConfig {
    fn default() -> Self {
        Self {
            objectives: Vec::new(),
            dedup: true,
        }
    }
}

impl PartitionConfig {
    /// Maximize every feature
    pub fn maximize_all() -> Self {
        Self::default()
    }

    /// Use an explicit objective per feature
    pub fn with_objectives(objectives: Vec<Objective>) -> Self {
        Self {
            objectives,
            ..Self::default()
        }
    }

    /// Keep duplicate rows; identical points then share a layer
    pub fn without_dedup(mut self) -> Self {
        self.dedup = false;
        self
    }

    /// Objective for feature `index`
    pub fn objective(&self, index: usize) -> Objective {
        self.objectives.get(index).copied().unwrap_or_default()
    }
}
