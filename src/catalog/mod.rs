//! Tour catalog
//!
//! The catalog is an immutable, ordered list of tours loaded once at startup,
//! either from the dataset compiled into the binary or from a TOML/JSON file.
//! Tours are handed out as `Arc<Tour>` so collections and filter results can
//! reference them without copying.
//!
//! # Document format
//!
//! ```toml
//! [[tours]]
//! id = "phi-phi-speedboat"
//! title = "Phi Phi Islands Day Trip by Speedboat"
//! location = "Phuket"
//! category = "Tours"
//! price = 2500
//! rating = 4.8
//! reviews = 1243
//! group_size = 35
//! start_time = "07:30"
//! image = "/images/tours/phi-phi.jpg"
//! theme = ["Island Hopping"]
//! activities = ["Snorkeling"]
//! features = ["Hotel pickup"]
//! ```
//!
//! JSON documents use the same shape: `{ "tours": [ ... ] }`.

pub mod error;
pub mod types;

pub use error::{CatalogError, TimeParseError};
pub use types::{Category, TimeOfDay, Tour};

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::Arc;

const BUILTIN_CATALOG: &str = include_str!("../../data/tours.toml");

#[derive(Debug, Default, Serialize, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    tours: Vec<Tour>,
}

/// Read-only, ordered tour catalog
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tours: Vec<Arc<Tour>>,
}

impl Catalog {
    /// Build a catalog from tours, validating identifiers and discounts
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if an id is empty or duplicated, or a discount
    /// exceeds 100%.
    pub fn new(tours: Vec<Tour>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(tours.len());
        for (index, tour) in tours.iter().enumerate() {
            if tour.id.trim().is_empty() {
                return Err(CatalogError::EmptyId(index));
            }
            if !seen.insert(tour.id.as_str()) {
                return Err(CatalogError::DuplicateId(tour.id.clone()));
            }
            if let Some(discount) = tour.discount
                && discount > 100
            {
                return Err(CatalogError::InvalidDiscount {
                    id: tour.id.clone(),
                    discount,
                });
            }
        }

        Ok(Self {
            tours: tours.into_iter().map(Arc::new).collect(),
        })
    }

    /// Load the dataset compiled into the binary
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the embedded document fails validation.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_toml_str(BUILTIN_CATALOG)
    }

    /// Parse a catalog from a TOML document
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the document cannot be parsed or validated.
    pub fn from_toml_str(contents: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = toml::from_str(contents)?;
        Self::new(document.tours)
    }

    /// Parse a catalog from a JSON document
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the document cannot be parsed or validated.
    pub fn from_json_str(contents: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(contents)?;
        Self::new(document.tours)
    }

    /// Load a catalog file; `.json` files are parsed as JSON, anything else as TOML
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the file cannot be read, parsed, or validated.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let catalog = if is_json {
            Self::from_json_str(&contents)?
        } else {
            Self::from_toml_str(&contents)?
        };

        tracing::info!(path = %path.display(), tours = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    /// All tours in catalog order
    #[must_use]
    pub fn tours(&self) -> &[Arc<Tour>] {
        &self.tours
    }

    /// Look up a tour by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Arc<Tour>> {
        self.tours.iter().find(|tour| tour.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tours.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tours.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Tour>> {
        self.tours.iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Arc<Tour>;
    type IntoIter = std::slice::Iter<'a, Arc<Tour>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tours.iter()
    }
}
