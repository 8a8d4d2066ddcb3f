use std::collections::HashSet;

use catalog::{FilterState, WineRecord};

/// Toggle `country` in the country selection, keeping subregions consistent.
///
/// Deselecting a country also deselects every subregion that belonged to it,
/// unless a still-selected country owns a subregion of the same name.
/// Returns whether `country` is selected afterwards.
///
/// ```rust
/// use catalog::{FilterState, WineRecord};
/// use filter::toggle_country;
///
/// let wines = vec![
///     WineRecord::new("a").with_country("Chile").with_subregion("Maipo Valley"),
///     WineRecord::new("b").with_country("Argentina").with_subregion("Mendoza"),
/// ];
/// let mut state = FilterState::default();
/// toggle_country(&mut state, "Chile", &wines);
/// state.toggle_subregion("Maipo Valley");
///
/// assert!(!toggle_country(&mut state, "Chile", &wines));
/// assert!(state.subregions.is_empty());
/// ```
pub fn toggle_country(state: &mut FilterState, country: &str, records: &[WineRecord]) -> bool {
    if state.countries.toggle(country.to_owned()) {
        return true;
    }

    let still_owned: HashSet<&str> = records
        .iter()
        .filter(|r| state.countries.contains(r.country.as_str()))
        .map(|r| r.subregion.as_str())
        .collect();
    let orphaned: HashSet<&str> = records
        .iter()
        .filter(|r| r.country == country)
        .map(|r| r.subregion.as_str())
        .filter(|s| !still_owned.contains(s))
        .collect();

    state
        .subregions
        .retain(|subregion| !orphaned.contains(subregion.as_str()));
    false
}
