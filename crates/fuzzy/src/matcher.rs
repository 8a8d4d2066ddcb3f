//! The ordered match cascade.
//!
//! A query is tested against a target by three strategies in a fixed order;
//! the first one that accepts wins and later ones are not run:
//!
//! 1. [`MatchStrategy::Containment`]: the normalized target contains the
//!    normalized query
//! 2. [`MatchStrategy::WordLevel`]: every query word finds some target word
//!    that contains it, is contained by it, or is similar enough
//! 3. [`MatchStrategy::WholeString`]: the normalized strings are similar
//!    enough as a whole
//!
//! There is no blended score: a pair either matches or it does not.
use serde::{Deserialize, Serialize};

use crate::config::{FuzzyConfig, MatchError};
use crate::distance::similarity;
use crate::normalize::{normalize, split_words};

/// One step of the match cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrategy {
    Containment,
    WordLevel,
    WholeString,
}

impl MatchStrategy {
    /// Strategies in evaluation order.
    pub const CASCADE: [MatchStrategy; 3] = [
        MatchStrategy::Containment,
        MatchStrategy::WordLevel,
        MatchStrategy::WholeString,
    ];

    fn accepts(self, query: &PreparedText, target: &PreparedText, threshold: f64) -> bool {
        match self {
            MatchStrategy::Containment => target.normalized.contains(query.normalized.as_str()),
            // Words are already lower-cased and whitespace-free, i.e. normalized.
            MatchStrategy::WordLevel => query.words.iter().all(|q| {
                target.words.iter().any(|t| {
                    t.contains(q.as_str())
                        || q.contains(t.as_str())
                        || similarity(q, t) >= threshold
                })
            }),
            MatchStrategy::WholeString => {
                similarity(&query.normalized, &target.normalized) >= threshold
            }
        }
    }
}

/// Text in both shapes the cascade needs, computed once.
///
/// Preparing the query up front avoids renormalizing it for every field of
/// every record during a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedText {
    normalized: String,
    words: Vec<String>,
}

impl PreparedText {
    pub fn new(text: &str) -> Self {
        Self {
            normalized: normalize(text),
            words: split_words(text),
        }
    }

    /// The lower-cased, whitespace-free form.
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// True for an empty or whitespace-only source text.
    pub fn is_blank(&self) -> bool {
        self.normalized.is_empty()
    }
}

/// Typo-tolerant matcher with a validated threshold.
///
/// ```rust
/// use fuzzy::{FuzzyConfig, FuzzyMatcher, MatchStrategy};
///
/// let matcher = FuzzyMatcher::new(FuzzyConfig::default()).unwrap();
/// assert!(matcher.is_match("sauvignon", "Cabernet Sauvignon"));
/// assert_eq!(
///     matcher.explain("cabernot", "Cabernet Sauvignon"),
///     Some(MatchStrategy::WordLevel)
/// );
/// assert!(!matcher.is_match("riesling", "Malbec"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FuzzyMatcher {
    config: FuzzyConfig,
}

impl FuzzyMatcher {
    pub fn new(config: FuzzyConfig) -> Result<Self, MatchError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Skip validation; used by the free functions that take a raw threshold.
    pub(crate) fn unchecked(threshold: f64) -> Self {
        Self {
            config: FuzzyConfig::with_threshold(threshold),
        }
    }

    pub fn config(&self) -> &FuzzyConfig {
        &self.config
    }

    pub fn threshold(&self) -> f64 {
        self.config.threshold
    }

    pub fn is_match(&self, query: &str, target: &str) -> bool {
        self.explain(query, target).is_some()
    }

    /// The strategy that accepted the pair, or `None` on no match.
    pub fn explain(&self, query: &str, target: &str) -> Option<MatchStrategy> {
        self.explain_prepared(&PreparedText::new(query), target)
    }

    pub fn is_match_prepared(&self, query: &PreparedText, target: &str) -> bool {
        self.explain_prepared(query, target).is_some()
    }

    pub fn explain_prepared(&self, query: &PreparedText, target: &str) -> Option<MatchStrategy> {
        cascade(query, &PreparedText::new(target), self.config.threshold)
    }
}

fn cascade(query: &PreparedText, target: &PreparedText, threshold: f64) -> Option<MatchStrategy> {
    MatchStrategy::CASCADE
        .into_iter()
        .find(|strategy| strategy.accepts(query, target, threshold))
}

/// Test `query` against a single field with an explicit threshold.
///
/// The threshold is not validated; values above `1.0` leave only the
/// containment and word-containment paths able to match.
///
/// ```rust
/// use fuzzy::{is_fuzzy_match, DEFAULT_THRESHOLD};
///
/// assert!(is_fuzzy_match("cabernot", "Cabernet Sauvignon", DEFAULT_THRESHOLD));
/// assert!(is_fuzzy_match("pinotnoir", "Pinot Noir", 1.0));
/// ```
pub fn is_fuzzy_match(query: &str, target: &str, threshold: f64) -> bool {
    cascade(&PreparedText::new(query), &PreparedText::new(target), threshold).is_some()
}
