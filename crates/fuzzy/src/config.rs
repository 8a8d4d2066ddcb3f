use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Similarity a word or whole string must reach to count as a match.
pub const DEFAULT_THRESHOLD: f64 = 0.7;

/// Configuration for a [`FuzzyMatcher`](crate::FuzzyMatcher).
///
/// Cheap to copy and serde-friendly so it can be embedded in a larger
/// application config.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuzzyConfig {
    /// Minimum similarity in `[0.0, 1.0]` accepted by the word-level and
    /// whole-string passes. Containment matches ignore it.
    #[serde(default = "FuzzyConfig::default_threshold")]
    pub threshold: f64,
}

impl FuzzyConfig {
    pub(crate) fn default_threshold() -> f64 {
        DEFAULT_THRESHOLD
    }

    pub fn with_threshold(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), MatchError> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(MatchError::InvalidConfig(format!(
                "threshold must be between 0.0 and 1.0, got {}",
                self.threshold
            )));
        }
        Ok(())
    }
}

impl Default for FuzzyConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

/// Errors produced when building a matcher.
///
/// Matching itself never fails.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MatchError {
    #[error("invalid match config: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = FuzzyConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.threshold, 0.7);
    }

    #[test]
    fn out_of_range_threshold_rejected() {
        for threshold in [-0.1, 1.5, f64::NAN] {
            let err = FuzzyConfig::with_threshold(threshold)
                .validate()
                .expect_err("config should be invalid");
            match err {
                MatchError::InvalidConfig(msg) => assert!(msg.contains("threshold")),
            }
        }
    }

    #[test]
    fn threshold_defaults_when_omitted() {
        let cfg: FuzzyConfig = serde_json::from_str("{}").expect("config decodes");
        assert_eq!(cfg, FuzzyConfig::default());
    }
}
