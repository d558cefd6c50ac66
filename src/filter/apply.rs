//! Filter evaluation
//!
//! Narrows a tour sequence against a `FilterState`. Each active field is an
//! independent predicate applied to the survivors of the previous one, so the
//! result is always the input order restricted to the tours that pass every
//! step. Inactive fields (empty query, empty selection, `None` ceiling) are
//! skipped.
//!
//! There are no error paths: unknown tags simply match nothing.
//!
//! ```ignore
//! use tourdesk::filter::{FilterState, TourFilterExt};
//!
//! let filters = FilterState::builder().theme("Beach").max_price(5000).build();
//! let visible = catalog.tours().apply_filter(&filters);
//! ```

use super::types::{Facet, FilterState};
use crate::catalog::{Catalog, Tour};
use std::sync::Arc;

/// One narrowing step, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Location,
    Theme,
    Activities,
    Price,
    StartTime,
    GroupSize,
    Vehicle,
    Features,
}

impl Step {
    const ORDER: [Self; 8] = [
        Self::Location,
        Self::Theme,
        Self::Activities,
        Self::Price,
        Self::StartTime,
        Self::GroupSize,
        Self::Vehicle,
        Self::Features,
    ];

    const fn facet(self) -> Option<Facet> {
        match self {
            Self::Theme => Some(Facet::Theme),
            Self::Activities => Some(Facet::Activity),
            Self::Vehicle => Some(Facet::Vehicle),
            Self::Features => Some(Facet::Feature),
            Self::Location | Self::Price | Self::StartTime | Self::GroupSize => None,
        }
    }

    fn is_active(self, filters: &FilterState) -> bool {
        match self {
            Self::Location => !filters.location.is_empty(),
            Self::Price => filters.max_price.is_some(),
            Self::StartTime => filters.max_start_time.is_some(),
            Self::GroupSize => filters.max_group_size.is_some(),
            Self::Theme | Self::Activities | Self::Vehicle | Self::Features => self
                .facet()
                .is_some_and(|facet| !filters.selection(facet).is_empty()),
        }
    }

    /// `needle` is the lowercased location query
    fn keep(self, tour: &Tour, filters: &FilterState, needle: &str) -> bool {
        match self {
            Self::Location => {
                tour.location.to_lowercase().contains(needle)
                    || tour.title.to_lowercase().contains(needle)
            }
            Self::Price => filters.max_price.is_none_or(|max| tour.price <= max),
            // Minutes are ignored on both sides: 17:45 passes a 17:00 ceiling.
            Self::StartTime => filters
                .max_start_time
                .is_none_or(|max| tour.start_time.hour() <= max.hour()),
            Self::GroupSize => filters
                .max_group_size
                .is_none_or(|max| tour.group_size <= max),
            Self::Theme | Self::Activities | Self::Vehicle | Self::Features => {
                self.facet().is_none_or(|facet| {
                    facet
                        .match_mode()
                        .matches(facet.tags(tour), filters.selection(facet))
                })
            }
        }
    }
}

/// Filter a catalog, preserving catalog order
#[must_use]
pub fn apply(catalog: &Catalog, filters: &FilterState) -> Vec<Arc<Tour>> {
    by_filter(catalog.tours(), filters)
}

/// Filter any tour sequence, preserving its order
#[must_use]
pub fn by_filter(tours: &[Arc<Tour>], filters: &FilterState) -> Vec<Arc<Tour>> {
    let needle = filters.location.to_lowercase();
    let mut result = tours.to_vec();

    for step in Step::ORDER {
        if result.is_empty() {
            break;
        }
        if !step.is_active(filters) {
            continue;
        }
        result.retain(|tour| step.keep(tour, filters, &needle));
        tracing::trace!(?step, remaining = result.len(), "filter step applied");
    }

    tracing::debug!(
        input = tours.len(),
        output = result.len(),
        filters = %filters,
        "filter applied"
    );
    result
}

/// Check a single tour against every active field
#[must_use]
pub fn matches(tour: &Tour, filters: &FilterState) -> bool {
    let needle = filters.location.to_lowercase();
    Step::ORDER
        .iter()
        .filter(|step| step.is_active(filters))
        .all(|step| step.keep(tour, filters, &needle))
}

/// Extension trait adding filter evaluation to tour slices
pub trait TourFilterExt {
    /// Keep the tours passing `filters`, in their current order
    fn apply_filter(&self, filters: &FilterState) -> Vec<Arc<Tour>>;
}

impl TourFilterExt for [Arc<Tour>] {
    fn apply_filter(&self, filters: &FilterState) -> Vec<Arc<Tour>> {
        by_filter(self, filters)
    }
}
