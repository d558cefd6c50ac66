//! Storefront session
//!
//! A `Session` is the state of one shopper: the committed filter, the tours
//! currently shown, the cart and the favorites. Everything it needs is passed
//! in at construction (a shared catalog and a notification sink), and all of
//! it is dropped with the session; nothing outlives it.
//!
//! # Workflow
//!
//! ```text
//! Session created (all tours visible, panel defaults pending)
//!     ↓
//! search(filters) ──→ visible = apply(catalog, filters)
//! add_to_cart / remove_from_cart ──→ cart notifies
//! toggle_favorite / remove_favorite ──→ favorites notify
//! reset_filters ──→ back to the initial view
//! ```

use crate::catalog::{Catalog, Tour};
use crate::collections::{Cart, Favorites};
use crate::filter::{self, FacetCounts, FilterDefaults, FilterState};
use crate::notify::NotificationSink;
use std::sync::Arc;

/// Session error type
pub type Result<T> = std::result::Result<T, SessionError>;

/// Errors that can occur while acting on a session
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Unknown tour '{0}'")]
    UnknownTour(String),
}

/// One shopper's view of the storefront
pub struct Session {
    catalog: Arc<Catalog>,
    defaults: FilterDefaults,
    filters: FilterState,
    visible: Vec<Arc<Tour>>,
    cart: Cart,
    favorites: Favorites,
}

impl Session {
    /// Start a session with the standard panel defaults
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, sink: Arc<dyn NotificationSink>) -> Self {
        Self::with_defaults(catalog, sink, FilterDefaults::default())
    }

    /// Start a session with custom panel defaults
    ///
    /// The initial view shows the whole catalog; the defaults only take
    /// effect once a search is committed.
    #[must_use]
    pub fn with_defaults(
        catalog: Arc<Catalog>,
        sink: Arc<dyn NotificationSink>,
        defaults: FilterDefaults,
    ) -> Self {
        let visible = catalog.tours().to_vec();
        Self {
            filters: FilterState::with_defaults(&defaults),
            defaults,
            visible,
            cart: Cart::new(Arc::clone(&sink)),
            favorites: Favorites::new(sink),
            catalog,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The most recently committed filter
    #[must_use]
    pub const fn filters(&self) -> &FilterState {
        &self.filters
    }

    #[must_use]
    pub const fn defaults(&self) -> &FilterDefaults {
        &self.defaults
    }

    /// Tours currently shown, in catalog order
    #[must_use]
    pub fn visible(&self) -> &[Arc<Tour>] {
        &self.visible
    }

    /// Commit a filter and recompute the visible tours
    pub fn search(&mut self, filters: FilterState) -> &[Arc<Tour>] {
        self.visible = filter::apply(&self.catalog, &filters);
        self.filters = filters;
        tracing::info!(filters = %self.filters, visible = self.visible.len(), "search committed");
        &self.visible
    }

    /// Restore the initial view: panel defaults and the whole catalog
    pub fn reset_filters(&mut self) -> &[Arc<Tour>] {
        self.filters.reset(&self.defaults);
        self.visible = self.catalog.tours().to_vec();
        &self.visible
    }

    /// Look up a catalog tour
    ///
    /// # Errors
    /// Returns `SessionError::UnknownTour` if no tour has this id.
    pub fn tour(&self, tour_id: &str) -> Result<&Arc<Tour>> {
        self.catalog
            .get(tour_id)
            .ok_or_else(|| SessionError::UnknownTour(tour_id.to_string()))
    }

    /// Add a catalog tour to the cart; `false` if it was already there
    ///
    /// # Errors
    /// Returns `SessionError::UnknownTour` if no tour has this id.
    pub fn add_to_cart(&mut self, tour_id: &str) -> Result<bool> {
        let tour = Arc::clone(self.tour(tour_id)?);
        Ok(self.cart.add(tour))
    }

    /// Remove a tour from the cart; unknown ids are a notified no-op
    pub fn remove_from_cart(&mut self, tour_id: &str) -> Option<Arc<Tour>> {
        self.cart.remove(tour_id)
    }

    /// Flip a catalog tour's favorite state; returns the new state
    ///
    /// # Errors
    /// Returns `SessionError::UnknownTour` if no tour has this id.
    pub fn toggle_favorite(&mut self, tour_id: &str) -> Result<bool> {
        let tour = Arc::clone(self.tour(tour_id)?);
        Ok(self.favorites.toggle(tour))
    }

    /// Remove a tour from the favorites; returns how many entries went away
    pub fn remove_favorite(&mut self, tour_id: &str) -> usize {
        self.favorites.remove(tour_id)
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    #[must_use]
    pub const fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    /// Tag counts over the whole catalog
    #[must_use]
    pub fn facets(&self) -> FacetCounts {
        FacetCounts::from_tours(self.catalog.tours())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::RecordingNotifier;
    use crate::testing::{TourBuilder, catalog_of, ids};

    fn session() -> (Session, Arc<RecordingNotifier>) {
        let catalog = catalog_of(vec![
            TourBuilder::new("A").price(5000).theme(&["Beach"]).build(),
            TourBuilder::new("B").price(15000).theme(&["City"]).build(),
            TourBuilder::new("C").price(900).theme(&["Beach"]).features(&["wifi"]).build(),
        ]);
        let sink = Arc::new(RecordingNotifier::new());
        (Session::new(Arc::new(catalog), sink.clone()), sink)
    }

    #[test]
    fn test_initial_view_shows_whole_catalog() {
        let (session, _sink) = session();
        assert_eq!(ids(session.visible()), vec!["A", "B", "C"]);
        assert_eq!(session.filters(), &FilterState::storefront_defaults());
    }

    #[test]
    fn test_search_replaces_visible() {
        let (mut session, _sink) = session();
        let visible = session.search(FilterState::builder().theme("Beach").build());
        assert_eq!(ids(visible), vec!["A", "C"]);

        session.search(FilterState::storefront_defaults());
        assert_eq!(ids(session.visible()), vec!["A", "C"]);
    }

    #[test]
    fn test_reset_restores_initial_view() {
        let (mut session, _sink) = session();
        session.search(FilterState::builder().feature("wifi").build());
        assert_eq!(session.visible().len(), 1);

        session.reset_filters();
        assert_eq!(session.visible().len(), 3);
        assert_eq!(session.filters(), &FilterState::storefront_defaults());
    }

    #[test]
    fn test_cart_flow_through_session() {
        let (mut session, sink) = session();

        assert!(session.add_to_cart("A").unwrap());
        assert!(!session.add_to_cart("A").unwrap());
        assert!(session.add_to_cart("C").unwrap());
        assert_eq!(session.cart().total_price(), 5900);

        assert!(session.remove_from_cart("A").is_some());
        assert_eq!(session.cart().len(), 1);
        assert_eq!(sink.len(), 3);
    }

    #[test]
    fn test_unknown_tour_is_an_error() {
        let (mut session, sink) = session();
        assert!(matches!(session.add_to_cart("nope"), Err(SessionError::UnknownTour(id)) if id == "nope"));
        assert!(session.toggle_favorite("nope").is_err());
        assert!(sink.is_empty());
    }

    #[test]
    fn test_remove_unknown_from_cart_notifies() {
        let (mut session, sink) = session();
        assert!(session.remove_from_cart("nope").is_none());
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_favorites_flow_through_session() {
        let (mut session, _sink) = session();
        assert!(session.toggle_favorite("B").unwrap());
        assert!(session.favorites().contains("B"));
        assert!(!session.toggle_favorite("B").unwrap());
        assert!(session.favorites().is_empty());

        session.toggle_favorite("A").unwrap();
        assert_eq!(session.remove_favorite("A"), 1);
    }

    #[test]
    fn test_facets_cover_whole_catalog_after_search() {
        let (mut session, _sink) = session();
        session.search(FilterState::builder().theme("City").build());

        let facets = session.facets();
        assert_eq!(facets.count(crate::filter::Facet::Theme, "Beach"), 2);
    }

    #[test]
    fn test_custom_defaults() {
        let catalog = Arc::new(catalog_of(vec![TourBuilder::new("x").build()]));
        let defaults = FilterDefaults {
            max_price: Some(100),
            max_start_time: None,
            max_group_size: None,
        };
        let mut session = Session::with_defaults(catalog, Arc::new(RecordingNotifier::new()), defaults);

        session.reset_filters();
        assert_eq!(session.filters().max_price, Some(100));
        assert_eq!(session.defaults(), &defaults);
    }
}
