//! Testing utilities for tourdesk
//!
//! Provides a `TourBuilder` for compact tour fixtures. Only the fields a
//! test cares about need to be set; everything else gets a neutral default
//! that passes an unconstrained filter.
//!
//! Only available when compiled with `cfg(test)`.

use crate::catalog::{Catalog, Category, TimeOfDay, Tour};
use std::sync::Arc;

/// Builder for tour fixtures
///
/// # Examples
/// ```ignore
/// let tour = TourBuilder::new("a").price(5000).theme(&["Beach"]).build();
/// ```
pub struct TourBuilder {
    tour: Tour,
}

impl TourBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            tour: Tour {
                id: id.to_string(),
                title: format!("Tour {id}"),
                location: "Bangkok".to_string(),
                category: Category::Tours,
                price: 1000,
                original_price: None,
                discount: None,
                rating: 4.5,
                reviews: 10,
                group_size: 10,
                start_time: TimeOfDay::new(9, 0).expect("valid fixture time"),
                image: format!("/images/{id}.jpg"),
                theme: Vec::new(),
                activities: Vec::new(),
                vehicle: Vec::new(),
                features: Vec::new(),
            },
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.tour.title = title.to_string();
        self
    }

    pub fn location(mut self, location: &str) -> Self {
        self.tour.location = location.to_string();
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.tour.category = category;
        self
    }

    pub fn price(mut self, price: u32) -> Self {
        self.tour.price = price;
        self
    }

    pub fn original_price(mut self, original_price: u32) -> Self {
        self.tour.original_price = Some(original_price);
        self
    }

    pub fn discount(mut self, discount: u8) -> Self {
        self.tour.discount = Some(discount);
        self
    }

    pub fn group_size(mut self, group_size: u32) -> Self {
        self.tour.group_size = group_size;
        self
    }

    /// # Panics
    /// Panics if `start_time` is not a valid `HH:MM` value.
    pub fn start_time(mut self, start_time: &str) -> Self {
        self.tour.start_time = start_time.parse().expect("valid fixture time");
        self
    }

    pub fn theme(mut self, tags: &[&str]) -> Self {
        self.tour.theme = to_strings(tags);
        self
    }

    pub fn activities(mut self, tags: &[&str]) -> Self {
        self.tour.activities = to_strings(tags);
        self
    }

    pub fn vehicle(mut self, tags: &[&str]) -> Self {
        self.tour.vehicle = to_strings(tags);
        self
    }

    pub fn features(mut self, tags: &[&str]) -> Self {
        self.tour.features = to_strings(tags);
        self
    }

    pub fn build(self) -> Tour {
        self.tour
    }

    pub fn shared(self) -> Arc<Tour> {
        Arc::new(self.tour)
    }
}

/// Build a catalog from fixtures
///
/// # Panics
/// Panics if the fixtures contain duplicate ids.
pub fn catalog_of(tours: Vec<Tour>) -> Catalog {
    Catalog::new(tours).expect("valid fixture catalog")
}

/// Ids of a tour list, in order
pub fn ids(tours: &[Arc<Tour>]) -> Vec<&str> {
    tours.iter().map(|tour| tour.id.as_str()).collect()
}

fn to_strings(tags: &[&str]) -> Vec<String> {
    tags.iter().map(|tag| (*tag).to_string()).collect()
}
