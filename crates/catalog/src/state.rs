//! Filter state: the current conjunction of per-dimension predicates.
//!
//! [`FilterState`] holds one inclusive [`RangeFilter`] per numeric dimension
//! and one [`Selection`] per categorical dimension. It is created with
//! dataset-independent defaults, changed one whole dimension at a time, and
//! reset back to those defaults.
//!
//! An empty [`Selection`] places no restriction on its dimension. A
//! non-empty one admits any of its values (OR within the dimension); the
//! dimensions themselves are combined with AND by the filter engine.
//!
//! ```rust
//! use catalog::{FilterState, RangeFilter};
//!
//! let mut state = FilterState::default();
//! state.toggle_wine_type("Red");
//! state.toggle_wine_type("White");
//! state.toggle_wine_type("Red");
//! assert_eq!(state.wine_types.as_slice(), ["White".to_string()]);
//!
//! state.set_price_range(RangeFilter::try_new(10_000, 80_000).unwrap());
//! state.reset();
//! assert!(state.is_default());
//! ```
use std::borrow::Borrow;
use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::types::{PROFILE_MAX, PROFILE_MIN};

/// Default price span in KRW.
pub const DEFAULT_PRICE_RANGE: (u64, u64) = (0, 500_000);
/// Default alcohol span in percent.
pub const DEFAULT_ALCOHOL_RANGE: (f32, f32) = (0.0, 25.0);

/// Inclusive `[min, max]` bound over one numeric dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeFilter<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialOrd + Copy + Debug> RangeFilter<T> {
    /// Build a range without checking the bounds.
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    /// Build a range, rejecting `min > max` and incomparable (NaN) bounds.
    pub fn try_new(min: T, max: T) -> Result<Self, CatalogError> {
        match min.partial_cmp(&max) {
            Some(std::cmp::Ordering::Greater) => Err(CatalogError::InvalidRange(format!(
                "min {min:?} exceeds max {max:?}"
            ))),
            Some(_) => Ok(Self { min, max }),
            None => Err(CatalogError::InvalidRange(format!(
                "bounds {min:?} and {max:?} are not comparable"
            ))),
        }
    }

    /// Inclusive on both ends.
    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Ordered, duplicate-free multi-select set for one categorical dimension.
///
/// Insertion order is preserved so the selection reads back the way the
/// user built it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection<T> {
    values: Vec<T>,
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self { values: Vec::new() }
    }
}

impl<T: PartialEq> Selection<T> {
    /// Add `value` if absent, remove it if present. Returns whether the value
    /// is selected afterwards.
    pub fn toggle(&mut self, value: T) -> bool {
        if let Some(pos) = self.values.iter().position(|v| *v == value) {
            self.values.remove(pos);
            false
        } else {
            self.values.push(value);
            true
        }
    }

    /// Add `value`; no-op if already selected.
    pub fn insert(&mut self, value: T) -> bool {
        if self.values.contains(&value) {
            return false;
        }
        self.values.push(value);
        true
    }

    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.values.iter().any(|v| v.borrow() == value)
    }

    pub fn retain(&mut self, keep: impl FnMut(&T) -> bool) {
        self.values.retain(keep);
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.values
    }
}

impl<T: PartialEq> FromIterator<T> for Selection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut selection = Selection::default();
        for value in iter {
            selection.insert(value);
        }
        selection
    }
}

impl<'a, T> IntoIterator for &'a Selection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

/// Current filter predicates, one per dimension.
///
/// Country selection lives here too, but changing it must also drop orphaned
/// subregions, which needs the catalog; use `filter::toggle_country` for that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    pub price: RangeFilter<u64>,
    pub alcohol: RangeFilter<f32>,
    pub tannin: RangeFilter<f32>,
    pub sweetness: RangeFilter<f32>,
    pub acidity: RangeFilter<f32>,
    pub body: RangeFilter<f32>,
    pub wine_types: Selection<String>,
    pub countries: Selection<String>,
    pub subregions: Selection<String>,
    pub vintages: Selection<i32>,
    pub grapes: Selection<String>,
    pub aromas: Selection<String>,
}

impl Default for FilterState {
    fn default() -> Self {
        let profile = RangeFilter::new(PROFILE_MIN, PROFILE_MAX);
        Self {
            price: RangeFilter::new(DEFAULT_PRICE_RANGE.0, DEFAULT_PRICE_RANGE.1),
            alcohol: RangeFilter::new(DEFAULT_ALCOHOL_RANGE.0, DEFAULT_ALCOHOL_RANGE.1),
            tannin: profile,
            sweetness: profile,
            acidity: profile,
            body: profile,
            wine_types: Selection::default(),
            countries: Selection::default(),
            subregions: Selection::default(),
            vintages: Selection::default(),
            grapes: Selection::default(),
            aromas: Selection::default(),
        }
    }
}

impl FilterState {
    /// Restore every dimension to its default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    pub fn toggle_wine_type(&mut self, wine_type: impl Into<String>) -> bool {
        self.wine_types.toggle(wine_type.into())
    }

    pub fn toggle_subregion(&mut self, subregion: impl Into<String>) -> bool {
        self.subregions.toggle(subregion.into())
    }

    pub fn toggle_vintage(&mut self, vintage: i32) -> bool {
        self.vintages.toggle(vintage)
    }

    pub fn toggle_grape(&mut self, grape: impl Into<String>) -> bool {
        self.grapes.toggle(grape.into())
    }

    pub fn toggle_aroma(&mut self, aroma: impl Into<String>) -> bool {
        self.aromas.toggle(aroma.into())
    }

    pub fn set_price_range(&mut self, range: RangeFilter<u64>) {
        self.price = range;
    }

    pub fn set_alcohol_range(&mut self, range: RangeFilter<f32>) {
        self.alcohol = range;
    }

    pub fn set_tannin_range(&mut self, range: RangeFilter<f32>) {
        self.tannin = range;
    }

    pub fn set_sweetness_range(&mut self, range: RangeFilter<f32>) {
        self.sweetness = range;
    }

    pub fn set_acidity_range(&mut self, range: RangeFilter<f32>) {
        self.acidity = range;
    }

    pub fn set_body_range(&mut self, range: RangeFilter<f32>) {
        self.body = range;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_full_scales() {
        let state = FilterState::default();
        assert_eq!(state.price, RangeFilter::new(0, 500_000));
        assert_eq!(state.alcohol, RangeFilter::new(0.0, 25.0));
        for range in [state.tannin, state.sweetness, state.acidity, state.body] {
            assert_eq!(range, RangeFilter::new(1.0, 5.0));
        }
        assert!(state.countries.is_empty());
        assert!(state.vintages.is_empty());
    }

    #[test]
    fn range_is_inclusive_on_both_ends() {
        let range = RangeFilter::new(1.0_f32, 5.0);
        assert!(range.contains(1.0));
        assert!(range.contains(5.0));
        assert!(!range.contains(5.5));
        assert!(!range.contains(0.5));
    }

    #[test]
    fn try_new_rejects_inverted_and_nan_bounds() {
        assert!(matches!(
            RangeFilter::try_new(10_u64, 1),
            Err(CatalogError::InvalidRange(_))
        ));
        assert!(RangeFilter::try_new(f32::NAN, 1.0).is_err());
        assert!(RangeFilter::try_new(3.0_f32, 3.0).is_ok());
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut sel = Selection::default();
        assert!(sel.toggle("France".to_string()));
        assert!(sel.contains("France"));
        assert!(!sel.toggle("France".to_string()));
        assert!(sel.is_empty());
    }

    #[test]
    fn selection_from_iter_deduplicates_in_order() {
        let sel: Selection<i32> = [2019, 2018, 2019].into_iter().collect();
        assert_eq!(sel.as_slice(), [2019, 2018]);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut state = FilterState::default();
        state.toggle_aroma("cherry");
        state.toggle_vintage(2018);
        state.set_body_range(RangeFilter::new(3.0, 4.0));
        assert!(!state.is_default());
        state.reset();
        assert!(state.is_default());
    }

    #[test]
    fn partial_state_deserializes_with_defaults() {
        let state: FilterState =
            serde_json::from_str(r#"{"countries": ["Chile"], "price": {"min": 0, "max": 1000}}"#)
                .expect("state decodes");
        assert!(state.countries.contains("Chile"));
        assert_eq!(state.price.max, 1000);
        assert_eq!(state.tannin, RangeFilter::new(1.0, 5.0));
    }
}
