//! YAML configuration for a cellar session.
//!
//! Every section is optional and falls back to the engine defaults, so an
//! empty document (apart from `version`) is a valid configuration.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! version: "1"
//! name: "shop front"
//!
//! search:
//!   threshold: 0.7
//!
//! filter:
//!   absence: pass      # or "reject"
//!
//! selection:
//!   max_selected: 5
//! ```

use std::fs;
use std::path::Path;

use filter::{AbsencePolicy, FilterConfig};
use fuzzy::{FuzzyConfig, DEFAULT_THRESHOLD};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default cap on how many records may be selected for comparison.
pub const DEFAULT_MAX_SELECTED: usize = 5;

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CellarConfig {
    /// Configuration format version
    pub version: String,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub search: SearchYamlConfig,

    #[serde(default)]
    pub filter: FilterYamlConfig,

    #[serde(default)]
    pub selection: SelectionYamlConfig,
}

impl CellarConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: CellarConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.search.validate()?;
        self.selection.validate()?;

        Ok(())
    }

    pub fn fuzzy_config(&self) -> FuzzyConfig {
        FuzzyConfig::with_threshold(self.search.threshold)
    }

    pub fn filter_config(&self) -> FilterConfig {
        FilterConfig {
            absence: self.filter.absence,
        }
    }
}

impl Default for CellarConfig {
    fn default() -> Self {
        Self {
            version: "1".to_string(),
            name: None,
            search: SearchYamlConfig::default(),
            filter: FilterYamlConfig::default(),
            selection: SelectionYamlConfig::default(),
        }
    }
}

/// Fuzzy search YAML configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchYamlConfig {
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

impl SearchYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        FuzzyConfig::with_threshold(self.threshold)
            .validate()
            .map_err(|e| ConfigLoadError::Validation(format!("search.{e}")))
    }
}

impl Default for SearchYamlConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

/// Predicate filter YAML configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterYamlConfig {
    #[serde(default)]
    pub absence: AbsencePolicy,
}

/// Comparison selection YAML configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionYamlConfig {
    #[serde(default = "default_max_selected")]
    pub max_selected: usize,
}

impl SelectionYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.max_selected == 0 {
            return Err(ConfigLoadError::Validation(
                "selection.max_selected must be >= 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for SelectionYamlConfig {
    fn default() -> Self {
        Self {
            max_selected: DEFAULT_MAX_SELECTED,
        }
    }
}

// Helper functions for serde defaults
fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}
fn default_max_selected() -> usize {
    DEFAULT_MAX_SELECTED
}
