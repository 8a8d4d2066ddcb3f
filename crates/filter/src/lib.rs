//! Predicate filtering and option derivation for the wine catalog.
//!
//! ## Core Types
//!
//! - [`FilterEngine`]: evaluates a [`FilterState`](catalog::FilterState)
//!   against records; every dimension must pass (AND across dimensions, OR
//!   within a multi-select)
//! - [`FilterConfig`] / [`AbsencePolicy`]: whether a missing attribute passes
//!   or fails an active predicate (passes by default)
//! - [`Dimension`]: names the dimension that rejected a record
//! - [`OptionSets`] / [`OptionCounts`]: distinct option values and facet
//!   counts derived from the catalog
//!
//! Filtering never fails and never mutates its inputs: a malformed or absent
//! value degrades to the configured absence outcome instead of an error.
//!
//! ```rust
//! use catalog::{FilterState, WineRecord};
//! use filter::{derive_options, filter_records, narrow_subregions, toggle_country};
//!
//! let wines = vec![
//!     WineRecord::new("Santa Rita 120").with_country("Chile").with_subregion("Central Valley"),
//!     WineRecord::new("Catena Malbec").with_country("Argentina").with_subregion("Mendoza"),
//! ];
//!
//! let options = derive_options(&wines);
//! assert_eq!(options.countries, vec!["Argentina", "Chile"]);
//!
//! let mut state = FilterState::default();
//! toggle_country(&mut state, "Chile", &wines);
//! assert_eq!(
//!     narrow_subregions(&wines, state.countries.as_slice()),
//!     vec!["Central Valley"]
//! );
//! assert_eq!(filter_records(&wines, &state).len(), 1);
//! ```

mod config;
mod dimension;
mod engine;
mod mutate;
mod options;

pub use crate::config::{AbsencePolicy, FilterConfig};
pub use crate::dimension::Dimension;
pub use crate::engine::{filter_records, FilterEngine};
pub use crate::mutate::toggle_country;
pub use crate::options::{
    count_options, derive_options, narrow_subregions, FacetCount, OptionCounts, OptionSets,
};
