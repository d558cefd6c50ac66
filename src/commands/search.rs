//! Search command - filter the catalog and list matching tours

use crate::{
    TourdeskError,
    catalog::Catalog,
    cli::OutputFormat,
    filter::{self, FilterState},
    output,
};
use colored::Colorize;
use std::io::Write;

type Result<T> = std::result::Result<T, TourdeskError>;

/// Execute the search command
///
/// Text output echoes the active filters unless `quiet`; JSON and CSV output
/// contain the tours only.
///
/// # Errors
/// Returns an error if rendering or writing the output fails.
pub fn execute(
    out: &mut impl Write,
    catalog: &Catalog,
    filters: &FilterState,
    format: OutputFormat,
    currency: &str,
    quiet: bool,
) -> Result<()> {
    let tours = filter::apply(catalog, filters);

    match format {
        OutputFormat::Text => {
            if !quiet {
                writeln!(out, "{} {filters}", "Filters:".bold())?;
            }
            let listing = output::tour_list(&tours, currency, quiet);
            if !listing.is_empty() {
                writeln!(out, "{listing}")?;
            }
        }
        OutputFormat::Json => writeln!(out, "{}", output::tours_json(&tours)?)?,
        OutputFormat::Csv => write!(out, "{}", output::tours_csv(&tours)?)?,
    }
    Ok(())
}
