//! Facets command - tag counts over the catalog

use crate::{TourdeskError, catalog::Catalog, filter::FacetCounts, output};
use std::io::Write;

type Result<T> = std::result::Result<T, TourdeskError>;

/// Execute the facets command
///
/// # Errors
/// Returns an error if writing the output fails.
pub fn execute(out: &mut impl Write, catalog: &Catalog, quiet: bool) -> Result<()> {
    let counts = FacetCounts::from_tours(catalog.tours());

    if counts == FacetCounts::default() {
        if !quiet {
            writeln!(out, "No tags found in catalog.")?;
        }
        return Ok(());
    }

    writeln!(out, "{}", output::facet_counts(&counts, quiet))?;
    Ok(())
}
