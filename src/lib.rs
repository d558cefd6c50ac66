//! Tourdesk - a tour-booking storefront core
//!
//! This library provides faceted filtering over an immutable tour catalog,
//! a session-scoped cart and favorites list that report changes through an
//! injected notification sink, and the pieces of the `tourdesk` command-line
//! front end.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use tourdesk::{catalog::Catalog, filter::FilterState, notify::NullNotifier, session::Session};
//!
//! let catalog = Arc::new(Catalog::builtin().unwrap());
//! let mut session = Session::new(catalog, Arc::new(NullNotifier));
//!
//! let visible = session.search(FilterState::builder().theme("Beach").max_price(5000).build());
//! assert!(visible.iter().all(|tour| tour.price <= 5000));
//! ```

use thiserror::Error;

pub mod catalog;
pub mod cli;
pub mod collections;
pub mod commands;
pub mod config;
pub mod filter;
pub mod notify;
pub mod output;
pub mod session;

#[cfg(test)]
pub mod testing;

pub use catalog::{Catalog, Tour};
pub use filter::FilterState;
pub use session::Session;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum TourdeskError {
    /// Catalog could not be loaded
    #[error("Catalog error: {0}")]
    Catalog(#[from] catalog::CatalogError),
    /// Session operation failed
    #[error("{0}")]
    Session(#[from] session::SessionError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Rendering JSON or CSV output failed
    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
