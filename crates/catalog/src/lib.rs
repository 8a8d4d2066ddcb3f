//! Wine catalog record model and filter state.
//!
//! This crate is the shared data layer for the filter and fuzzy-search
//! engines. It defines:
//!
//! - [`WineRecord`]: one read-only catalog entry with categorical, numeric
//!   and tag attributes (numeric attributes are individually optional)
//! - [`FilterState`]: the current predicate conjunction, built from
//!   [`RangeFilter`] and [`Selection`]
//! - catalog loading from a JSON array of records, with validation
//!
//! The catalog is loaded once and never mutated afterwards; every engine
//! works over `&[WineRecord]`.
//!
//! ```rust
//! use catalog::load_catalog_from_str;
//!
//! let json = r#"[
//!     {"wine_name": "Cloudy Bay", "country": "New Zealand", "wine_type": "White"},
//!     {"wine_name": "Penfolds Bin 389", "country": "Australia", "price_krw": 98000}
//! ]"#;
//! let wines = load_catalog_from_str(json).expect("catalog loads");
//! assert_eq!(wines.len(), 2);
//! ```
use std::fs;
use std::path::Path;
use std::time::Instant;

use tracing::{info, warn, Level};

mod error;
mod state;
mod types;

pub use crate::error::CatalogError;
pub use crate::state::{
    FilterState, RangeFilter, Selection, DEFAULT_ALCOHOL_RANGE, DEFAULT_PRICE_RANGE,
};
pub use crate::types::{WineRecord, PROFILE_MAX, PROFILE_MIN};

/// Load and validate a catalog file containing a JSON array of records.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<WineRecord>, CatalogError> {
    let path = path.as_ref();
    let span = tracing::span!(Level::INFO, "catalog.load", path = %path.display());
    let _guard = span.enter();

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            warn!(error = %err, "catalog_load_failure");
            return Err(err.into());
        }
    };
    load_catalog_from_str(&content)
}

/// Decode and validate a catalog from a JSON string.
///
/// Unrated profile values (`0` or anything off the 1-5 scale) and negative
/// alcohol load as absent instead of failing the catalog.
pub fn load_catalog_from_str(json: &str) -> Result<Vec<WineRecord>, CatalogError> {
    let start = Instant::now();
    match parse_and_validate(json) {
        Ok(records) => {
            info!(
                record_count = records.len(),
                elapsed_micros = start.elapsed().as_micros(),
                "catalog_loaded"
            );
            Ok(records)
        }
        Err(err) => {
            warn!(
                error = %err,
                elapsed_micros = start.elapsed().as_micros(),
                "catalog_load_failure"
            );
            Err(err)
        }
    }
}

fn parse_and_validate(json: &str) -> Result<Vec<WineRecord>, CatalogError> {
    let mut records: Vec<WineRecord> = serde_json::from_str(json)?;
    for (index, record) in records.iter_mut().enumerate() {
        for field in record.clear_unrated() {
            warn!(index, field, "catalog_value_dropped");
        }
    }
    validate_records(&records)?;
    Ok(records)
}

/// Validate every record, reporting the first offending index.
pub fn validate_records(records: &[WineRecord]) -> Result<(), CatalogError> {
    for (index, record) in records.iter().enumerate() {
        record
            .validate()
            .map_err(|reason| CatalogError::InvalidRecord { index, reason })?;
    }
    Ok(())
}
