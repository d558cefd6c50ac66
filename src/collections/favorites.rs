//! Favorites list
//!
//! Same shape as the cart, with two differences:
//! `add` appends without checking for an existing entry, so the same tour can
//! appear twice, and notifications carry a heart icon hint.
//!
//! The card's heart button goes through [`Favorites::toggle`], which checks
//! membership first and therefore never creates duplicates.

use super::list::TourList;
use crate::catalog::Tour;
use crate::notify::{Notification, NotificationSink};
use std::sync::Arc;

pub const ADDED_MESSAGE: &str = "Added to favorites!";
pub const REMOVED_MESSAGE: &str = "Removed from favorites!";
pub const ADDED_ICON: &str = "❤️";
pub const REMOVED_ICON: &str = "💔";

pub struct Favorites {
    items: TourList,
    sink: Arc<dyn NotificationSink>,
}

impl Favorites {
    #[must_use]
    pub fn new(sink: Arc<dyn NotificationSink>) -> Self {
        Self {
            items: TourList::new(),
            sink,
        }
    }

    /// Append a tour and notify, without an id check
    pub fn add(&mut self, tour: Arc<Tour>) {
        tracing::debug!(tour = %tour.id, "added to favorites");
        self.items.push(tour);
        self.sink
            .notify(Notification::success(ADDED_MESSAGE).with_icon(ADDED_ICON));
    }

    /// Remove every entry with the given id and notify unconditionally
    ///
    /// Returns the number of entries removed.
    pub fn remove(&mut self, tour_id: &str) -> usize {
        let removed = self.items.remove_all(tour_id).len();
        tracing::debug!(tour = tour_id, removed, "removed from favorites");
        self.sink
            .notify(Notification::success(REMOVED_MESSAGE).with_icon(REMOVED_ICON));
        removed
    }

    /// Favorite the tour if it is not one yet, otherwise unfavorite it
    ///
    /// Returns whether the tour is a favorite afterwards.
    pub fn toggle(&mut self, tour: Arc<Tour>) -> bool {
        if self.items.contains(&tour.id) {
            self.remove(&tour.id);
            false
        } else {
            self.add(tour);
            true
        }
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
}

impl std::fmt::Debug for Favorites {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Favorites").field("items", &self.items).finish_non_exhaustive()
    }
}
