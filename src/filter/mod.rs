//! Catalog filtering
//!
//! - **`types`**: `FilterState`, its builder, panel defaults and facets
//! - **`apply`**: the evaluator narrowing a tour list against a filter state
//! - **`facets`**: per-tag counts shown next to every panel option
//!
//! Location, price, start time and group size narrow by value. Themes,
//! activities and vehicles match when ANY selected tag is present; features
//! match only when ALL selected tags are present.

pub mod apply;
pub mod facets;
pub mod types;

pub use apply::{TourFilterExt, apply, by_filter, matches};
pub use facets::FacetCounts;
pub use types::{Facet, FilterDefaults, FilterState, FilterStateBuilder, MatchMode};
