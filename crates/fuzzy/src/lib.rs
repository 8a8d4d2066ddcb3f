//! Typo-tolerant text matching for the wine catalog.
//!
//! ## What we do
//!
//! - Normalize text by case folding and removing whitespace
//! - Score two strings with `1 - levenshtein / max_len`
//! - Decide a query/field match with an ordered cascade: containment, then
//!   word-level, then whole-string similarity (first success wins)
//! - Search records across name, country, subregion, grape/style, wine
//!   type and aromas
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock, no shared state. The same query, catalog and threshold
//! always give the same hits, so a matcher can be shared freely across
//! threads.
//!
//! ```rust
//! use fuzzy::{edit_distance, is_fuzzy_match, similarity, DEFAULT_THRESHOLD};
//!
//! assert_eq!(edit_distance("cabernet", "cabernot"), 1);
//! assert!((similarity("cabernet", "cabernot") - 0.875).abs() < f64::EPSILON);
//! assert!(is_fuzzy_match("cabernot", "Cabernet Sauvignon", DEFAULT_THRESHOLD));
//! ```

mod config;
mod distance;
mod matcher;
mod normalize;
mod record;

pub use crate::config::{FuzzyConfig, MatchError, DEFAULT_THRESHOLD};
pub use crate::distance::{edit_distance, similarity};
pub use crate::matcher::{is_fuzzy_match, FuzzyMatcher, MatchStrategy, PreparedText};
pub use crate::normalize::{normalize, split_words};
pub use crate::record::{matches_record, search_records, SearchField};
