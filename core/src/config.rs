//! Engine configuration
//!
//! Configuration is a plain serde record loaded from JSON. Every field has a
//! default so partial documents are accepted; `validate` rejects values the
//! engine cannot honour.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::algorithm::traits::AlgorithmKind;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read configuration: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid configuration value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Spanning tree engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Algorithm used when the caller does not pick one
    pub default_algorithm: AlgorithmKind,

    /// Start vertex for frontier growth when the caller supplies none.
    /// `None` selects the lexicographically smallest vertex.
    pub default_start_vertex: Option<String>,

    /// Absolute tolerance when comparing total costs
    pub cost_tolerance: f64,

    /// Fail runs on NaN, infinite or negative edge weights
    pub reject_invalid_weights: bool,

    /// Capacity of the run store; the oldest run is evicted beyond it
    pub max_retained_runs: usize,

    /// `env_logger` filter directive, e.g. `"info"` or `"spantrace_core=trace"`
    pub log_filter: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_algorithm: AlgorithmKind::EdgeSorted,
            default_start_vertex: None,
            cost_tolerance: 1e-3,
            reject_invalid_weights: false,
            max_retained_runs: 32,
            log_filter: "info".to_string(),
        }
    }
}

impl EngineConfig {
    /// Parses and validates a JSON document
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.cost_tolerance.is_finite() || self.cost_tolerance < 0.0 {
            return Err(ConfigError::Invalid {
                field: "cost_tolerance",
                reason: format!("must be finite and non-negative, got {}", self.cost_tolerance),
            });
        }
        if self.max_retained_runs == 0 {
            return Err(ConfigError::Invalid {
                field: "max_retained_runs",
                reason: "must retain at least one run".to_string(),
            });
        }
        if let Some(start) = &self.default_start_vertex {
            if start.is_empty() {
                return Err(ConfigError::Invalid {
                    field: "default_start_vertex",
                    reason: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn with_default_algorithm(mut self, kind: AlgorithmKind) -> Self {
        self.default_algorithm = kind;
        self
    }

    pub fn with_default_start_vertex(mut self, vertex: impl Into<String>) -> Self {
        self.default_start_vertex = Some(vertex.into());
        self
    }

    pub fn with_cost_tolerance(mut self, tolerance: f64) -> Self {
        self.cost_tolerance = tolerance;
        self
    }

    pub fn with_reject_invalid_weights(mut self, reject: bool) -> Self {
        self.reject_invalid_weights = reject;
        self
    }

    pub fn with_max_retained_runs(mut self, capacity: usize) -> Self {
        self.max_retained_runs = capacity;
        self
    }
}
