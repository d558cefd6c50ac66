//! Filter state data structures
//!
//! - `FilterState`: the narrowing criteria committed by a search action
//! - `FilterDefaults`: the initial slider ceilings of the filter panel
//! - `Facet`: the four tag dimensions a tour is classified by
//! - `MatchMode`: how multiple selected tags of one facet combine

use crate::catalog::{TimeOfDay, Tour};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Tag matching mode (ALL = AND, ANY = OR)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Match ALL selected tags (AND logic)
    All,
    /// Match ANY selected tag (OR logic)
    #[default]
    Any,
}

impl MatchMode {
    /// Check a tour's tags against a selection
    ///
    /// An empty selection matches everything.
    #[must_use]
    pub fn matches(self, tags: &[String], selected: &BTreeSet<String>) -> bool {
        if selected.is_empty() {
            return true;
        }
        match self {
            Self::All => selected.iter().all(|s| tags.contains(s)),
            Self::Any => selected.iter().any(|s| tags.contains(s)),
        }
    }
}

/// Tag dimension of a tour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Facet {
    Theme,
    Activity,
    Vehicle,
    Feature,
}

impl Facet {
    pub const ALL: [Self; 4] = [Self::Theme, Self::Activity, Self::Vehicle, Self::Feature];

    /// Features require every selected tag; the other facets accept any
    #[must_use]
    pub const fn match_mode(self) -> MatchMode {
        match self {
            Self::Feature => MatchMode::All,
            Self::Theme | Self::Activity | Self::Vehicle => MatchMode::Any,
        }
    }

    /// Whether the filter panel lets several values be selected at once
    #[must_use]
    pub const fn is_multi_select(self) -> bool {
        matches!(self, Self::Feature)
    }

    /// The tour's tags for this facet
    #[must_use]
    pub fn tags(self, tour: &Tour) -> &[String] {
        match self {
            Self::Theme => &tour.theme,
            Self::Activity => &tour.activities,
            Self::Vehicle => &tour.vehicle,
            Self::Feature => &tour.features,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Theme => "Theme",
            Self::Activity => "Activities",
            Self::Vehicle => "Vehicle",
            Self::Feature => "Features",
        }
    }
}

/// Initial ceilings of the filter panel sliders
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FilterDefaults {
    pub max_price: Option<u32>,
    pub max_start_time: Option<TimeOfDay>,
    pub max_group_size: Option<u32>,
}

impl Default for FilterDefaults {
    fn default() -> Self {
        Self {
            max_price: Some(12_500),
            max_start_time: TimeOfDay::new(17, 0).ok(),
            max_group_size: Some(40),
        }
    }
}

/// Narrowing criteria for one search
///
/// The default value constrains nothing: every string is empty, every set is
/// empty and every ceiling is `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    /// Case-insensitive substring matched against location or title
    pub location: String,

    pub themes: BTreeSet<String>,
    pub activities: BTreeSet<String>,

    /// Inclusive price ceiling
    pub max_price: Option<u32>,

    /// Inclusive start time ceiling, compared by hour only
    pub max_start_time: Option<TimeOfDay>,

    /// Inclusive group size ceiling
    pub max_group_size: Option<u32>,

    pub vehicles: BTreeSet<String>,

    /// Every selected feature must be present
    pub features: BTreeSet<String>,
}

impl FilterState {
    /// Create a new filter state builder
    #[must_use]
    pub fn builder() -> FilterStateBuilder {
        FilterStateBuilder::default()
    }

    /// The filter panel's initial state
    #[must_use]
    pub fn storefront_defaults() -> Self {
        Self::with_defaults(&FilterDefaults::default())
    }

    /// Unconstrained state with the given slider ceilings
    #[must_use]
    pub fn with_defaults(defaults: &FilterDefaults) -> Self {
        Self {
            max_price: defaults.max_price,
            max_start_time: defaults.max_start_time,
            max_group_size: defaults.max_group_size,
            ..Self::default()
        }
    }

    /// Reset every field to the given slider ceilings
    pub fn reset(&mut self, defaults: &FilterDefaults) {
        *self = Self::with_defaults(defaults);
    }

    /// True when no field narrows the catalog
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.location.is_empty()
            && self.max_price.is_none()
            && self.max_start_time.is_none()
            && self.max_group_size.is_none()
            && Facet::ALL.iter().all(|f| self.selection(*f).is_empty())
    }

    /// Selected tags of a facet
    #[must_use]
    pub const fn selection(&self, facet: Facet) -> &BTreeSet<String> {
        match facet {
            Facet::Theme => &self.themes,
            Facet::Activity => &self.activities,
            Facet::Vehicle => &self.vehicles,
            Facet::Feature => &self.features,
        }
    }

    pub const fn selection_mut(&mut self, facet: Facet) -> &mut BTreeSet<String> {
        match facet {
            Facet::Theme => &mut self.themes,
            Facet::Activity => &mut self.activities,
            Facet::Vehicle => &mut self.vehicles,
            Facet::Feature => &mut self.features,
        }
    }

    /// Toggle a tag the way the filter panel buttons do
    ///
    /// Multi-select facets add or remove the value. Single-select facets
    /// replace the selection with the value, or clear it when the value is
    /// already the one selected.
    pub fn toggle(&mut self, facet: Facet, value: &str) {
        let selection = self.selection_mut(facet);
        if selection.contains(value) {
            selection.remove(value);
        } else {
            if !facet.is_multi_select() {
                selection.clear();
            }
            selection.insert(value.to_string());
        }
    }
}

impl fmt::Display for FilterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if !self.location.is_empty() {
            parts.push(format!("location~\"{}\"", self.location));
        }
        for facet in Facet::ALL {
            let selection = self.selection(facet);
            if !selection.is_empty() {
                let joiner = match facet.match_mode() {
                    MatchMode::All => " & ",
                    MatchMode::Any => " | ",
                };
                let values: Vec<&str> = selection.iter().map(String::as_str).collect();
                parts.push(format!("{}={}", facet.label().to_lowercase(), values.join(joiner)));
            }
        }
        if let Some(price) = self.max_price {
            parts.push(format!("price<={price}"));
        }
        if let Some(time) = self.max_start_time {
            parts.push(format!("start<={time}"));
        }
        if let Some(size) = self.max_group_size {
            parts.push(format!("group<={size}"));
        }

        if parts.is_empty() {
            f.write_str("(no filters)")
        } else {
            f.write_str(&parts.join(", "))
        }
    }
}

/// Builder for `FilterState`
#[derive(Debug, Clone, Default)]
pub struct FilterStateBuilder {
    state: FilterState,
}

impl FilterStateBuilder {
    /// Start from the given slider ceilings instead of an unconstrained state
    #[must_use]
    pub fn defaults(mut self, defaults: &FilterDefaults) -> Self {
        self.state.max_price = defaults.max_price;
        self.state.max_start_time = defaults.max_start_time;
        self.state.max_group_size = defaults.max_group_size;
        self
    }

    #[must_use]
    pub fn location(mut self, query: impl Into<String>) -> Self {
        self.state.location = query.into();
        self
    }

    #[must_use]
    pub fn theme(mut self, theme: impl Into<String>) -> Self {
        self.state.themes.insert(theme.into());
        self
    }

    #[must_use]
    pub fn activity(mut self, activity: impl Into<String>) -> Self {
        self.state.activities.insert(activity.into());
        self
    }

    #[must_use]
    pub fn vehicle(mut self, vehicle: impl Into<String>) -> Self {
        self.state.vehicles.insert(vehicle.into());
        self
    }

    #[must_use]
    pub fn feature(mut self, feature: impl Into<String>) -> Self {
        self.state.features.insert(feature.into());
        self
    }

    #[must_use]
    pub const fn max_price(mut self, price: u32) -> Self {
        self.state.max_price = Some(price);
        self
    }

    #[must_use]
    pub const fn max_start_time(mut self, time: TimeOfDay) -> Self {
        self.state.max_start_time = Some(time);
        self
    }

    #[must_use]
    pub const fn max_group_size(mut self, size: u32) -> Self {
        self.state.max_group_size = Some(size);
        self
    }

    #[must_use]
    pub fn build(self) -> FilterState {
        self.state
    }
}
