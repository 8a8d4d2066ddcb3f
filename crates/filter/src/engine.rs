use catalog::{FilterState, RangeFilter, Selection, WineRecord};

use crate::config::{AbsencePolicy, FilterConfig};
use crate::dimension::Dimension;


/// Evaluates a [`FilterState`] against catalog records.
///
/// A record is kept when every dimension passes:
///
/// - range dimensions: the value lies in `[min, max]`
/// - categorical dimensions: the selection is empty or holds the value
/// - aromas: the selection is empty or shares at least one aroma
/// - vintage: the selection is empty or holds the year
///
/// Absent numeric values and an absent vintage are handled by the
/// configured [`AbsencePolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterEngine {
    config: FilterConfig,
}

impl FilterEngine {
    pub fn new(config: FilterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Records passing `state`, in catalog order.
    pub fn filter<'a>(
        &self,
        records: &'a [WineRecord],
        state: &FilterState,
    ) -> Vec<&'a WineRecord> {
        records
            .iter()
            .filter(|record| self.matches(record, state))
            .collect()
    }

    pub fn matches(&self, record: &WineRecord, state: &FilterState) -> bool {
        self.first_failure(record, state).is_none()
    }

    /// The first dimension, in [`Dimension::ALL`] order, that rejects `record`.
    pub fn first_failure(&self, record: &WineRecord, state: &FilterState) -> Option<Dimension> {
        Dimension::ALL
            .into_iter()
            .find(|dimension| !self.passes(*dimension, record, state))
    }

    pub fn passes(&self, dimension: Dimension, record: &WineRecord, state: &FilterState) -> bool {
        match dimension {
            Dimension::Price => self.in_range(record.price, &state.price),
            Dimension::WineType => selected(&state.wine_types, &record.wine_type),
            Dimension::Country => selected(&state.countries, &record.country),
            Dimension::Subregion => selected(&state.subregions, &record.subregion),
            Dimension::Vintage => {
                state.vintages.is_empty()
                    || match record.vintage {
                        Some(year) => state.vintages.contains(&year),
                        None => self.absent_passes(),
                    }
            }
            Dimension::Grape => selected(&state.grapes, &record.grape_or_style),
            Dimension::Aroma => {
                state.aromas.is_empty() || state.aromas.iter().any(|aroma| record.has_aroma(aroma))
            }
            Dimension::Tannin => self.in_range(record.tannin, &state.tannin),
            Dimension::Sweetness => self.in_range(record.sweetness, &state.sweetness),
            Dimension::Acidity => self.in_range(record.acidity, &state.acidity),
            Dimension::Body => self.in_range(record.body, &state.body),
            Dimension::Alcohol => self.in_range(record.alcohol, &state.alcohol),
        }
    }

    fn in_range<T: PartialOrd + Copy + std::fmt::Debug>(
        &self,
        value: Option<T>,
        range: &RangeFilter<T>,
    ) -> bool {
        match value {
            Some(v) => range.contains(v),
            None => self.absent_passes(),
        }
    }

    fn absent_passes(&self) -> bool {
        self.config.absence == AbsencePolicy::Pass
    }
}

fn selected(selection: &Selection<String>, value: &str) -> bool {
    selection.is_empty() || selection.contains(value)
}

/// Filter `records` with the default (absence-tolerant) engine.
///
/// ```rust
/// use catalog::{FilterState, WineRecord};
/// use filter::filter_records;
///
/// let wines = vec![
///     WineRecord::new("House Red").with_price(50_000),
///     WineRecord::new("Grand Cru").with_price(600_000),
/// ];
/// let hits = filter_records(&wines, &FilterState::default());
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].name, "House Red");
/// ```
pub fn filter_records<'a>(records: &'a [WineRecord], state: &FilterState) -> Vec<&'a WineRecord> {
    FilterEngine::default().filter(records, state)
}
