//! Workspace umbrella crate for the wine cellar browser.
//!
//! This crate stitches together catalog loading, predicate filtering and
//! fuzzy search so callers can browse a catalog through a single [`Cellar`]
//! handle. The member crates stay usable on their own; everything they
//! export is re-exported here.
//!
//! Filtering and search are independent pure passes. [`Cellar::browse`]
//! intersects them: a record is shown when it passes the filter state and,
//! for a non-blank query, also matches the search.

pub mod config;
mod metrics;
pub mod selection;

pub use catalog::{
    load_catalog, load_catalog_from_str, validate_records, CatalogError, FilterState,
    RangeFilter, Selection, WineRecord, DEFAULT_ALCOHOL_RANGE, DEFAULT_PRICE_RANGE, PROFILE_MAX,
    PROFILE_MIN,
};
pub use filter::{
    count_options, derive_options, filter_records, narrow_subregions, toggle_country,
    AbsencePolicy, Dimension, FacetCount, FilterConfig, FilterEngine, OptionCounts, OptionSets,
};
pub use fuzzy::{
    edit_distance, is_fuzzy_match, matches_record, normalize, search_records, similarity,
    FuzzyConfig, FuzzyMatcher, MatchError, MatchStrategy, PreparedText, SearchField,
    DEFAULT_THRESHOLD,
};

pub use crate::config::{CellarConfig, ConfigLoadError, DEFAULT_MAX_SELECTED};
pub use crate::metrics::{set_cellar_metrics, CellarMetrics};
pub use crate::selection::{
    SelectionChange, SelectionError, SelectionKey, SelectionSet, MIN_COMPARED,
};

use std::path::Path;
use std::time::Instant;

use thiserror::Error;
use tracing::{debug, info, warn, Level};

use crate::metrics::MetricsSpan;

/// Errors raised while assembling a [`Cellar`].
///
/// Browsing itself never fails.
#[derive(Debug, Error)]
pub enum CellarError {
    #[error("catalog failure: {0}")]
    Catalog(#[from] CatalogError),
    #[error("config failure: {0}")]
    Config(#[from] ConfigLoadError),
    #[error("matcher failure: {0}")]
    Match(#[from] MatchError),
}

/// A loaded catalog together with the engines that browse it.
#[derive(Debug, Clone)]
pub struct Cellar {
    records: Vec<WineRecord>,
    filters: FilterEngine,
    matcher: FuzzyMatcher,
    selection: SelectionSet,
}

impl Cellar {
    /// Wrap `records` with default engine settings.
    pub fn new(records: Vec<WineRecord>) -> Self {
        Self {
            records,
            filters: FilterEngine::default(),
            matcher: FuzzyMatcher::default(),
            selection: SelectionSet::default(),
        }
    }

    pub fn from_config(
        records: Vec<WineRecord>,
        config: &CellarConfig,
    ) -> Result<Self, CellarError> {
        config.validate()?;
        Ok(Self {
            records,
            filters: FilterEngine::new(config.filter_config()),
            matcher: FuzzyMatcher::new(config.fuzzy_config())?,
            selection: SelectionSet::new(config.selection.max_selected),
        })
    }

    /// Load a catalog file and build a cellar configured by `config`.
    pub fn open<P: AsRef<Path>>(path: P, config: &CellarConfig) -> Result<Self, CellarError> {
        let records = load_catalog(path)?;
        Self::from_config(records, config)
    }

    pub fn records(&self) -> &[WineRecord] {
        &self.records
    }

    pub fn filter_engine(&self) -> &FilterEngine {
        &self.filters
    }

    pub fn matcher(&self) -> &FuzzyMatcher {
        &self.matcher
    }

    pub fn options(&self) -> OptionSets {
        derive_options(&self.records)
    }

    pub fn option_counts(&self) -> OptionCounts {
        count_options(&self.records)
    }

    /// Subregion options narrowed to the countries selected in `state`.
    pub fn narrowed_subregions(&self, state: &FilterState) -> Vec<String> {
        narrow_subregions(&self.records, state.countries.as_slice())
    }

    /// Toggle a country in `state`, dropping subregions it no longer owns.
    pub fn toggle_country(&self, state: &mut FilterState, country: &str) -> bool {
        toggle_country(state, country, &self.records)
    }

    /// Records passing every predicate in `state`, in catalog order.
    pub fn filter(&self, state: &FilterState) -> Vec<&WineRecord> {
        let span = MetricsSpan::start();
        let start = Instant::now();
        let hits = self.filters.filter(&self.records, state);
        debug!(
            scanned = self.records.len(),
            matched = hits.len(),
            default_state = state.is_default(),
            elapsed_micros = start.elapsed().as_micros(),
            "filter_applied"
        );
        if let Some(span) = span {
            span.record_filter(self.records.len(), hits.len());
        }
        hits
    }

    /// Records fuzzily matching `query`, in catalog order.
    ///
    /// A blank query matches nothing.
    pub fn search(&self, query: &str) -> Vec<&WineRecord> {
        let span = MetricsSpan::start();
        let start = Instant::now();
        let hits = self.matcher.search(&self.records, query);
        debug!(
            query = %query,
            scanned = self.records.len(),
            matched = hits.len(),
            elapsed_micros = start.elapsed().as_micros(),
            "search_completed"
        );
        if let Some(span) = span {
            span.record_search(self.records.len(), hits.len());
        }
        hits
    }

    /// Records passing `state` that also match `query`.
    ///
    /// A blank query adds no constraint, so the result is the filter result.
    pub fn browse(&self, state: &FilterState, query: &str) -> Vec<&WineRecord> {
        let browse_span = tracing::span!(Level::INFO, "cellar.browse");
        let _guard = browse_span.enter();

        let query = PreparedText::new(query);
        let span = MetricsSpan::start();
        let start = Instant::now();
        let hits: Vec<&WineRecord> = self
            .records
            .iter()
            .filter(|r| self.filters.matches(r, state))
            .filter(|r| query.is_blank() || self.matcher.matches_record(&query, r))
            .collect();
        info!(
            scanned = self.records.len(),
            matched = hits.len(),
            searched = !query.is_blank(),
            elapsed_micros = start.elapsed().as_micros(),
            "browse_completed"
        );
        if let Some(span) = span {
            if query.is_blank() {
                span.record_filter(self.records.len(), hits.len());
            } else {
                span.record_search(self.records.len(), hits.len());
            }
        }
        hits
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Toggle `record` in the comparison selection.
    pub fn toggle_selection(
        &mut self,
        record: &WineRecord,
    ) -> Result<SelectionChange, SelectionError> {
        let key = SelectionKey::of(record);
        match self.selection.toggle(key) {
            Ok(change) => {
                debug!(
                    name = %record.name,
                    change = ?change,
                    selected = self.selection.len(),
                    "selection_toggled"
                );
                Ok(change)
            }
            Err(err) => {
                warn!(name = %record.name, error = %err, "selection_rejected");
                Err(err)
            }
        }
    }

    pub fn clear_selection(&mut self) {
        debug!(cleared = self.selection.len(), "selection_cleared");
        self.selection.clear();
    }

    /// Selected records in catalog order.
    pub fn selected_records(&self) -> Vec<&WineRecord> {
        self.selection.resolve(&self.records)
    }

    /// Selected records, once enough are picked to compare side by side.
    pub fn comparison(&self) -> Option<Vec<&WineRecord>> {
        self.selection.can_compare().then(|| self.selected_records())
    }
}
