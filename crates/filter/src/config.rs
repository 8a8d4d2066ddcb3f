use serde::{Deserialize, Serialize};

/// How a predicate treats a record that has no value for its dimension.
///
/// Applies to the numeric range dimensions and to a non-empty vintage
/// selection. Categorical and aroma selections compare strings and lists
/// that are always present, so they are unaffected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AbsencePolicy {
    /// Absence is a wildcard: unrated or unknown items stay visible.
    #[default]
    Pass,
    /// Absence fails the predicate.
    Reject,
}

/// Configuration for a [`FilterEngine`](crate::FilterEngine).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterConfig {
    #[serde(default)]
    pub absence: AbsencePolicy,
}

impl FilterConfig {
    pub fn strict() -> Self {
        Self {
            absence: AbsencePolicy::Reject,
        }
    }
}
