//! Bounded set of records picked for side-by-side comparison.
//!
//! Records are identified by [`SelectionKey`] rather than by name alone, so
//! two bottlings of the same wine (different vintage or subregion) can be
//! selected independently.

use catalog::WineRecord;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::DEFAULT_MAX_SELECTED;

/// Fewest selected records a side-by-side comparison needs.
pub const MIN_COMPARED: usize = 2;

/// Identity of a record within a selection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SelectionKey {
    pub name: String,
    pub vintage: Option<i32>,
    pub subregion: String,
}

impl SelectionKey {
    pub fn of(record: &WineRecord) -> Self {
        Self {
            name: record.name.clone(),
            vintage: record.vintage,
            subregion: record.subregion.clone(),
        }
    }

    pub fn matches(&self, record: &WineRecord) -> bool {
        self.name == record.name
            && self.vintage == record.vintage
            && self.subregion == record.subregion
    }
}

/// Outcome of a successful [`SelectionSet::toggle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    Added,
    Removed,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SelectionError {
    #[error("selection limit reached ({max} records)")]
    LimitReached { max: usize },
}

/// Insertion-ordered set of [`SelectionKey`]s with a fixed capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSet {
    keys: Vec<SelectionKey>,
    max_selected: usize,
}

impl SelectionSet {
    /// Create an empty selection holding at most `max_selected` keys.
    ///
    /// A cap of zero is raised to one.
    pub fn new(max_selected: usize) -> Self {
        Self {
            keys: Vec::new(),
            max_selected: max_selected.max(1),
        }
    }

    pub fn max_selected(&self) -> usize {
        self.max_selected
    }

    /// Add `key` if absent, remove it if present.
    ///
    /// Adding to a full set fails with [`SelectionError::LimitReached`] and
    /// leaves the set unchanged. Removal always succeeds.
    pub fn toggle(&mut self, key: SelectionKey) -> Result<SelectionChange, SelectionError> {
        if let Some(pos) = self.keys.iter().position(|k| *k == key) {
            self.keys.remove(pos);
            return Ok(SelectionChange::Removed);
        }
        if self.keys.len() >= self.max_selected {
            return Err(SelectionError::LimitReached {
                max: self.max_selected,
            });
        }
        self.keys.push(key);
        Ok(SelectionChange::Added)
    }

    pub fn contains(&self, key: &SelectionKey) -> bool {
        self.keys.contains(key)
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.keys.len() >= self.max_selected
    }

    /// Whether between [`MIN_COMPARED`] and the cap are selected.
    pub fn can_compare(&self) -> bool {
        (MIN_COMPARED..=self.max_selected).contains(&self.keys.len())
    }

    /// Selected keys in the order they were added.
    pub fn keys(&self) -> &[SelectionKey] {
        &self.keys
    }

    /// Records matching a selected key, in catalog order.
    ///
    /// Keys with no matching record are skipped. Exact duplicates in the
    /// catalog all resolve.
    pub fn resolve<'a>(&self, records: &'a [WineRecord]) -> Vec<&'a WineRecord> {
        records
            .iter()
            .filter(|r| self.keys.iter().any(|k| k.matches(r)))
            .collect()
    }
}

impl Default for SelectionSet {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SELECTED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wine(name: &str, vintage: i32) -> WineRecord {
        WineRecord::new(name)
            .with_subregion("Rioja Alta")
            .with_vintage(vintage)
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut set = SelectionSet::default();
        let key = SelectionKey::of(&wine("Muga Reserva", 2018));
        assert_eq!(set.toggle(key.clone()), Ok(SelectionChange::Added));
        assert!(set.contains(&key));
        assert_eq!(set.toggle(key.clone()), Ok(SelectionChange::Removed));
        assert!(set.is_empty());
    }

    #[test]
    fn same_name_different_vintage_are_distinct() {
        let mut set = SelectionSet::default();
        set.toggle(SelectionKey::of(&wine("Muga Reserva", 2018))).unwrap();
        set.toggle(SelectionKey::of(&wine("Muga Reserva", 2019))).unwrap();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn full_set_rejects_additions_but_allows_removal() {
        let mut set = SelectionSet::new(2);
        let a = SelectionKey::of(&wine("a", 2018));
        let b = SelectionKey::of(&wine("b", 2018));
        set.toggle(a.clone()).unwrap();
        set.toggle(b).unwrap();
        assert!(set.is_full());

        let err = set.toggle(SelectionKey::of(&wine("c", 2018))).unwrap_err();
        assert_eq!(err, SelectionError::LimitReached { max: 2 });
        assert_eq!(set.len(), 2);

        assert_eq!(set.toggle(a), Ok(SelectionChange::Removed));
        assert!(!set.is_full());
    }

    #[test]
    fn comparison_needs_at_least_two() {
        let mut set = SelectionSet::default();
        assert!(!set.can_compare());
        set.toggle(SelectionKey::of(&wine("a", 2018))).unwrap();
        assert!(!set.can_compare());
        set.toggle(SelectionKey::of(&wine("b", 2018))).unwrap();
        assert!(set.can_compare());
        for name in ["c", "d", "e"] {
            set.toggle(SelectionKey::of(&wine(name, 2018))).unwrap();
        }
        assert!(set.is_full());
        assert!(set.can_compare());
    }

    #[test]
    fn single_slot_selection_never_compares() {
        let mut set = SelectionSet::new(1);
        set.toggle(SelectionKey::of(&wine("a", 2018))).unwrap();
        assert!(!set.can_compare());
    }

    #[test]
    fn zero_cap_is_raised_to_one() {
        assert_eq!(SelectionSet::new(0).max_selected(), 1);
    }

    #[test]
    fn keys_keep_insertion_order() {
        let mut set = SelectionSet::default();
        let b = SelectionKey::of(&wine("b", 2020));
        let a = SelectionKey::of(&wine("a", 2020));
        set.toggle(b.clone()).unwrap();
        set.toggle(a.clone()).unwrap();
        assert_eq!(set.keys(), [b, a]);
        set.clear();
        assert!(set.keys().is_empty());
    }

    #[test]
    fn resolve_returns_records_in_catalog_order() {
        let catalog = vec![wine("first", 2015), wine("second", 2016), wine("third", 2017)];
        let mut set = SelectionSet::default();
        set.toggle(SelectionKey::of(&catalog[2])).unwrap();
        set.toggle(SelectionKey::of(&catalog[0])).unwrap();
        set.toggle(SelectionKey::of(&wine("missing", 1999))).unwrap();

        let names: Vec<&str> = set.resolve(&catalog).iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["first", "third"]);
    }
}
