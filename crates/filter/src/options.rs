//! Filter options derived from a catalog.
//!
//! Options are recomputed from the source records and never edited in
//! place. Subregion options can be narrowed to the countries a user has
//! already selected.
use std::collections::{BTreeMap, BTreeSet};

use catalog::WineRecord;
use serde::{Deserialize, Serialize};

/// Distinct, sorted values available per dimension.
///
/// Strings sort ascending; vintages sort most recent first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionSets {
    pub wine_types: Vec<String>,
    pub countries: Vec<String>,
    pub subregions: Vec<String>,
    pub vintages: Vec<i32>,
    pub grapes: Vec<String>,
    pub aromas: Vec<String>,
}

/// Derive every option list from `records`.
///
/// Empty strings and absent vintages are skipped.
///
/// ```rust
/// use catalog::WineRecord;
/// use filter::derive_options;
///
/// let wines = vec![
///     WineRecord::new("a").with_country("France").with_vintage(2018),
///     WineRecord::new("b").with_country("Italy").with_vintage(2021),
///     WineRecord::new("c").with_country("France"),
/// ];
/// let options = derive_options(&wines);
/// assert_eq!(options.countries, vec!["France", "Italy"]);
/// assert_eq!(options.vintages, vec![2021, 2018]);
/// ```
pub fn derive_options(records: &[WineRecord]) -> OptionSets {
    OptionSets {
        wine_types: distinct(records.iter().map(|r| r.wine_type.as_str())),
        countries: distinct(records.iter().map(|r| r.country.as_str())),
        subregions: distinct(records.iter().map(|r| r.subregion.as_str())),
        vintages: records
            .iter()
            .filter_map(|r| r.vintage)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .rev()
            .collect(),
        grapes: distinct(records.iter().map(|r| r.grape_or_style.as_str())),
        aromas: distinct(records.iter().flat_map(|r| r.aromas.iter().map(String::as_str))),
    }
}

/// Subregions of records whose country is in `selected_countries`.
///
/// With no country selected the full subregion list is returned. A
/// subregion name shared by two countries is only listed through the
/// country that is selected.
pub fn narrow_subregions<S: AsRef<str>>(
    records: &[WineRecord],
    selected_countries: &[S],
) -> Vec<String> {
    if selected_countries.is_empty() {
        return distinct(records.iter().map(|r| r.subregion.as_str()));
    }
    distinct(
        records
            .iter()
            .filter(|r| selected_countries.iter().any(|c| c.as_ref() == r.country))
            .map(|r| r.subregion.as_str()),
    )
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .filter(|v| !v.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_owned)
        .collect()
}

/// How many records carry one option value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetCount<T> {
    pub value: T,
    pub count: usize,
}

/// Per-dimension record counts.
///
/// String facets are ordered by count, highest first, with ties broken
/// alphabetically. Vintages are ordered by year, most recent first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionCounts {
    pub wine_types: Vec<FacetCount<String>>,
    pub countries: Vec<FacetCount<String>>,
    pub subregions: Vec<FacetCount<String>>,
    pub vintages: Vec<FacetCount<i32>>,
    pub grapes: Vec<FacetCount<String>>,
    pub aromas: Vec<FacetCount<String>>,
}

/// Count records per option value.
///
/// An aroma is counted once per record even if listed twice.
pub fn count_options(records: &[WineRecord]) -> OptionCounts {
    let mut vintages: BTreeMap<i32, usize> = BTreeMap::new();
    for year in records.iter().filter_map(|r| r.vintage) {
        *vintages.entry(year).or_default() += 1;
    }

    OptionCounts {
        wine_types: by_count(records.iter().map(|r| r.wine_type.as_str())),
        countries: by_count(records.iter().map(|r| r.country.as_str())),
        subregions: by_count(records.iter().map(|r| r.subregion.as_str())),
        vintages: vintages
            .into_iter()
            .rev()
            .map(|(value, count)| FacetCount { value, count })
            .collect(),
        grapes: by_count(records.iter().map(|r| r.grape_or_style.as_str())),
        aromas: by_count(records.iter().flat_map(|r| {
            r.aromas
                .iter()
                .map(String::as_str)
                .collect::<BTreeSet<_>>()
        })),
    }
}

fn by_count<'a>(values: impl Iterator<Item = &'a str>) -> Vec<FacetCount<String>> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for value in values.filter(|v| !v.is_empty()) {
        *counts.entry(value).or_default() += 1;
    }
    let mut facets: Vec<FacetCount<String>> = counts
        .into_iter()
        .map(|(value, count)| FacetCount {
            value: value.to_owned(),
            count,
        })
        .collect();
    // Stable sort keeps the alphabetical order from the map for equal counts.
    facets.sort_by(|a, b| b.count.cmp(&a.count));
    facets
}
