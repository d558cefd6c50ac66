//! Facet counts for the filter panel
//!
//! Every tag option in the panel is shown with the number of catalog tours
//! carrying it, e.g. `Beach (3)`. Counts are taken over the full catalog,
//! not the current result, so options never disappear while filtering.

use super::types::Facet;
use crate::catalog::Tour;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Tag occurrence counts per facet
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FacetCounts {
    pub themes: BTreeMap<String, usize>,
    pub activities: BTreeMap<String, usize>,
    pub vehicles: BTreeMap<String, usize>,
    pub features: BTreeMap<String, usize>,
}

impl FacetCounts {
    /// Count tags over a tour sequence
    pub fn from_tours<'a>(tours: impl IntoIterator<Item = &'a Arc<Tour>>) -> Self {
        let mut counts = Self::default();
        for tour in tours {
            for facet in Facet::ALL {
                let map = counts.get_mut(facet);
                for tag in facet.tags(tour) {
                    *map.entry(tag.clone()).or_insert(0) += 1;
                }
            }
        }
        counts
    }

    #[must_use]
    pub const fn get(&self, facet: Facet) -> &BTreeMap<String, usize> {
        match facet {
            Facet::Theme => &self.themes,
            Facet::Activity => &self.activities,
            Facet::Vehicle => &self.vehicles,
            Facet::Feature => &self.features,
        }
    }

    const fn get_mut(&mut self, facet: Facet) -> &mut BTreeMap<String, usize> {
        match facet {
            Facet::Theme => &mut self.themes,
            Facet::Activity => &mut self.activities,
            Facet::Vehicle => &mut self.vehicles,
            Facet::Feature => &mut self.features,
        }
    }

    /// Count for one tag; zero for tags nobody carries
    #[must_use]
    pub fn count(&self, facet: Facet, tag: &str) -> usize {
        self.get(facet).get(tag).copied().unwrap_or(0)
    }

    /// Known tags of a facet, sorted
    pub fn vocabulary(&self, facet: Facet) -> impl Iterator<Item = &str> {
        self.get(facet).keys().map(String::as_str)
    }
}
