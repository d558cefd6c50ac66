//! Shopping cart
//!
//! An ordered, id-unique list of tours. Adding a tour already in the cart is
//! a silent no-op; removing always notifies, even when nothing was removed.

use super::list::TourList;
use crate::catalog::Tour;
use crate::notify::{Notification, NotificationSink};
use std::sync::Arc;

pub const ADDED_MESSAGE: &str = "Added to cart!";
pub const REMOVED_MESSAGE: &str = "Removed from cart!";

pub struct Cart {
    items: TourList,
    sink: Arc<dyn NotificationSink>,
}

impl Cart {
    #[must_use]
    pub fn new(sink: Arc<dyn NotificationSink>) -> Self {
        Self {
            items: TourList::new(),
            sink,
        }
    }

    /// Append a tour unless one with the same id is already in the cart
    ///
    /// Returns `true` and notifies only when the tour was inserted.
    pub fn add(&mut self, tour: Arc<Tour>) -> bool {
        if self.items.contains(&tour.id) {
            tracing::debug!(tour = %tour.id, "already in cart");
            return false;
        }

        tracing::debug!(tour = %tour.id, "added to cart");
        self.items.push(tour);
        self.sink.notify(Notification::success(ADDED_MESSAGE));
        true
    }

    /// Remove the tour with the given id
    ///
    /// The removal notification fires whether or not the tour was present.
    pub fn remove(&mut self, tour_id: &str) -> Option<Arc<Tour>> {
        let removed = self.items.remove_all(tour_id).into_iter().next();
        tracing::debug!(tour = tour_id, removed = removed.is_some(), "removed from cart");
        self.sink.notify(Notification::success(REMOVED_MESSAGE));
        removed
    }

    #[must_use]
    pub fn contains(&self, tour_id: &str) -> bool {
        self.items.contains(tour_id)
    }

    #[must_use]
    pub fn items(&self) -> &[Arc<Tour>] {
        self.items.items()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of the prices of everything in the cart
    #[must_use]
    pub fn total_price(&self) -> u64 {
        self.items.total_price()
    }

    /// Sum of `original_price - price` over discounted entries
    #[must_use]
    pub fn total_savings(&self) -> u64 {
        self.items
            .items()
            .iter()
            .filter_map(|tour| tour.savings())
            .map(u64::from)
            .sum()
    }
}

impl std::fmt::Debug for Cart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cart").field("items", &self.items).finish_non_exhaustive()
    }
}
