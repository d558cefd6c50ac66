//! Ordered tour list shared by the cart and favorites
//!
//! Holds `Arc<Tour>` references in insertion order. Whether duplicate ids
//! are allowed is the owning manager's decision; the list itself does not
//! check.

use crate::catalog::Tour;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct TourList {
    entries: Vec<Arc<Tour>>,
}

impl TourList {
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    pub fn push(&mut self, tour: Arc<Tour>) {
        self.entries.push(tour);
    }

    /// Remove every entry with the given id, returning the removed entries
    pub fn remove_all(&mut self, tour_id: &str) -> Vec<Arc<Tour>> {
        let mut removed = Vec::new();
        self.entries.retain(|entry| {
            if entry.id == tour_id {
                removed.push(Arc::clone(entry));
                false
            } else {
                true
            }
        });
        removed
    }

    #[must_use]
    pub fn contains(&self, tour_id: &str) -> bool {
        self.entries.iter().any(|entry| entry.id == tour_id)
    }

    #[must_use]
    pub fn items(&self) -> &[Arc<Tour>] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of entry prices
    #[must_use]
    pub fn total_price(&self) -> u64 {
        self.entries.iter().map(|entry| u64::from(entry.price)).sum()
    }
}
