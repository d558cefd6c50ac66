//! Show command - details for one tour

use crate::{TourdeskError, catalog::Catalog, output, session::SessionError};
use std::io::Write;

type Result<T> = std::result::Result<T, TourdeskError>;

/// Execute the show command
///
/// # Errors
/// Returns `SessionError::UnknownTour` if no tour has this id, or an I/O
/// error if writing fails.
pub fn execute(out: &mut impl Write, catalog: &Catalog, tour_id: &str, currency: &str) -> Result<()> {
    let tour = catalog
        .get(tour_id)
        .ok_or_else(|| SessionError::UnknownTour(tour_id.to_string()))?;

    writeln!(out, "{}", output::tour_details(tour, currency))?;
    Ok(())
}
