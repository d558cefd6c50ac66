//! Catalog error types
//!
//! Errors raised while loading or validating a tour catalog. Once a catalog
//! has been built it is immutable, so nothing downstream of loading can fail
//! with these.

use thiserror::Error;

/// Errors that can occur while loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog document is not valid TOML
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// The catalog document is not valid JSON
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Two tours share the same identifier
    #[error("Duplicate tour id '{0}'")]
    DuplicateId(String),

    /// A tour has an empty identifier
    #[error("Tour at position {0} has an empty id")]
    EmptyId(usize),

    /// A discount percentage outside `0..=100`
    #[error("Tour '{id}' has an invalid discount of {discount}%")]
    InvalidDiscount { id: String, discount: u8 },
}

/// Error returned when a time-of-day string cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid time of day '{input}': {reason}")]
pub struct TimeParseError {
    input: String,
    reason: &'static str,
}

impl TimeParseError {
    pub(crate) fn new(input: impl Into<String>, reason: &'static str) -> Self {
        Self {
            input: input.into(),
            reason,
        }
    }

    /// The rejected input
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    pub(crate) const fn reason(&self) -> &'static str {
        self.reason
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
