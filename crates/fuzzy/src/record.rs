//! Record-level search over the text fields of a [`WineRecord`].
//!
//! A record matches when the query fuzzy-matches any one searchable field:
//! name, country, subregion, grape/style, wine type, or any single aroma.
use catalog::WineRecord;
use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_THRESHOLD;
use crate::matcher::{FuzzyMatcher, PreparedText};

/// A searchable text field of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchField {
    Name,
    Country,
    Subregion,
    Grape,
    WineType,
    Aroma,
}

impl SearchField {
    /// Scalar fields in the order they are tested; aromas come last.
    const SCALAR: [SearchField; 5] = [
        SearchField::Name,
        SearchField::Country,
        SearchField::Subregion,
        SearchField::Grape,
        SearchField::WineType,
    ];

    fn scalar_value(self, record: &WineRecord) -> &str {
        match self {
            SearchField::Name => &record.name,
            SearchField::Country => &record.country,
            SearchField::Subregion => &record.subregion,
            SearchField::Grape => &record.grape_or_style,
            SearchField::WineType => &record.wine_type,
            SearchField::Aroma => "",
        }
    }
}

impl FuzzyMatcher {
    /// The first field of `record` that `query` matches, if any.
    pub fn matched_field(&self, query: &PreparedText, record: &WineRecord) -> Option<SearchField> {
        SearchField::SCALAR
            .into_iter()
            .find(|field| self.is_match_prepared(query, field.scalar_value(record)))
            .or_else(|| {
                record
                    .aromas
                    .iter()
                    .any(|aroma| self.is_match_prepared(query, aroma))
                    .then_some(SearchField::Aroma)
            })
    }

    pub fn matches_record(&self, query: &PreparedText, record: &WineRecord) -> bool {
        self.matched_field(query, record).is_some()
    }

    /// Records matching `query`, in catalog order.
    ///
    /// An empty or whitespace-only query means no search is active and
    /// returns nothing, not the whole catalog.
    pub fn search<'a>(&self, records: &'a [WineRecord], query: &str) -> Vec<&'a WineRecord> {
        let query = PreparedText::new(query);
        if query.is_blank() {
            return Vec::new();
        }
        records
            .iter()
            .filter(|record| self.matches_record(&query, record))
            .collect()
    }
}

/// Test `query` against every searchable field of `record`.
pub fn matches_record(query: &str, record: &WineRecord, threshold: f64) -> bool {
    FuzzyMatcher::unchecked(threshold).matches_record(&PreparedText::new(query), record)
}

/// Search `records` with the default threshold.
///
/// ```rust
/// use catalog::WineRecord;
/// use fuzzy::search_records;
///
/// let wines = vec![
///     WineRecord::new("Opus One").with_grape("Cabernet Sauvignon"),
///     WineRecord::new("Cloudy Bay").with_grape("Sauvignon Blanc"),
///     WineRecord::new("Almaviva").with_aromas(["cassis", "tobacco"]),
/// ];
///
/// let hits = search_records(&wines, "cabernot");
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].name, "Opus One");
///
/// assert!(search_records(&wines, "   ").is_empty());
/// ```
pub fn search_records<'a>(records: &'a [WineRecord], query: &str) -> Vec<&'a WineRecord> {
    FuzzyMatcher::unchecked(DEFAULT_THRESHOLD).search(records, query)
}
