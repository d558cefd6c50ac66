//! Output formatting for CLI display
//!
//! Rendering of tours, the cart, favorites and facet counts as text, plus
//! JSON and CSV renderers for scripted use.

use crate::catalog::Tour;
use crate::collections::Cart;
use crate::filter::{Facet, FacetCounts};
use colored::Colorize;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

/// Errors raised while rendering machine-readable output
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Group digits in threes: `12500` -> `12,500`
#[must_use]
pub fn group_thousands(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Format a price with its currency label: `THB 12,500`
#[must_use]
pub fn format_price(amount: u64, currency: &str) -> String {
    format!("{currency} {}", group_thousands(amount))
}

/// One-line tour summary; just the id when `quiet`
#[must_use]
pub fn tour_line(tour: &Tour, currency: &str, quiet: bool) -> String {
    if quiet {
        return tour.id.clone();
    }

    let mut line = format!(
        "  {} {} ({}) [{}] {}",
        tour.id.bold(),
        tour.title,
        tour.location,
        tour.category,
        format_price(u64::from(tour.price), currency).yellow(),
    );
    if let Some(discount) = tour.discount {
        line.push_str(&format!(" {}", format!("{discount}% OFF").red()));
    }
    line.push_str(&format!(" ★ {:.1} ({})", tour.rating, tour.reviews));
    line
}

/// Multi-line tour description
#[must_use]
pub fn tour_details(tour: &Tour, currency: &str) -> String {
    let mut lines = vec![
        format!("{} ({})", tour.title.bold(), tour.id),
        format!("  Location:   {}", tour.location),
        format!("  Category:   {}", tour.category),
    ];

    let mut price = format_price(u64::from(tour.price), currency);
    if let Some(original) = tour.original_price
        && original > tour.price
    {
        price.push_str(&format!(" (was {})", format_price(u64::from(original), currency)));
    }
    if let Some(discount) = tour.discount {
        price.push_str(&format!(" {discount}% OFF"));
    }
    lines.push(format!("  Price:      {price}"));
    lines.push(format!("  Rating:     ★ {:.1} ({} reviews)", tour.rating, tour.reviews));
    lines.push(format!("  Group size: up to {}", tour.group_size));
    lines.push(format!("  Starts:     {}", tour.start_time));

    for facet in Facet::ALL {
        let tags = facet.tags(tour);
        if !tags.is_empty() {
            lines.push(format!("  {:<11} {}", format!("{}:", facet.label()), tags.join(", ")));
        }
    }
    lines.join("\n")
}

/// Tour list with a trailing count, or an empty-state message
#[must_use]
pub fn tour_list(tours: &[Arc<Tour>], currency: &str, quiet: bool) -> String {
    if tours.is_empty() {
        return if quiet {
            String::new()
        } else {
            "No tours found. Try adjusting your filters.".dimmed().to_string()
        };
    }

    let mut lines: Vec<String> = tours
        .iter()
        .map(|tour| tour_line(tour, currency, quiet))
        .collect();
    if !quiet {
        lines.push(format!("{} tour(s)", tours.len()).dimmed().to_string());
    }
    lines.join("\n")
}

/// Cart contents with the total
#[must_use]
pub fn cart_summary(cart: &Cart, currency: &str) -> String {
    if cart.is_empty() {
        return "Your cart is empty".dimmed().to_string();
    }

    let mut lines: Vec<String> = cart
        .items()
        .iter()
        .map(|tour| {
            format!(
                "  {} {}  {}",
                tour.id.bold(),
                tour.title,
                format_price(u64::from(tour.price), currency)
            )
        })
        .collect();

    lines.push(format!(
        "Total: {}",
        format_price(cart.total_price(), currency).bold()
    ));
    let savings = cart.total_savings();
    if savings > 0 {
        lines.push(format!("You save {}", format_price(savings, currency)).green().to_string());
    }
    lines.join("\n")
}

/// Facet counts, one section per facet
#[must_use]
pub fn facet_counts(counts: &FacetCounts, quiet: bool) -> String {
    let mut lines = Vec::new();
    for facet in Facet::ALL {
        let map = counts.get(facet);
        if map.is_empty() {
            continue;
        }
        if quiet {
            lines.extend(map.keys().map(|tag| format!("{}:{tag}", facet.label().to_lowercase())));
        } else {
            lines.push(format!("{}:", facet.label()).bold().to_string());
            lines.extend(map.iter().map(|(tag, count)| format!("  {tag} ({count})")));
        }
    }
    lines.join("\n")
}

/// Tours as a pretty JSON array
///
/// # Errors
/// Returns `OutputError::Json` if serialization fails.
pub fn tours_json(tours: &[Arc<Tour>]) -> Result<String, OutputError> {
    let tours: Vec<&Tour> = tours.iter().map(|tour| &**tour).collect();
    Ok(serde_json::to_string_pretty(&tours)?)
}

#[derive(Serialize)]
struct TourRow<'a> {
    id: &'a str,
    title: &'a str,
    location: &'a str,
    category: String,
    price: u32,
    original_price: Option<u32>,
    discount: Option<u8>,
    rating: f32,
    reviews: u32,
    group_size: u32,
    start_time: String,
    theme: String,
    activities: String,
    vehicle: String,
    features: String,
}

impl<'a> From<&'a Tour> for TourRow<'a> {
    fn from(tour: &'a Tour) -> Self {
        Self {
            id: &tour.id,
            title: &tour.title,
            location: &tour.location,
            category: tour.category.to_string(),
            price: tour.price,
            original_price: tour.original_price,
            discount: tour.discount,
            rating: tour.rating,
            reviews: tour.reviews,
            group_size: tour.group_size,
            start_time: tour.start_time.to_string(),
            theme: tour.theme.join(";"),
            activities: tour.activities.join(";"),
            vehicle: tour.vehicle.join(";"),
            features: tour.features.join(";"),
        }
    }
}

/// Tours as CSV with a header row; tag lists are `;`-separated
///
/// # Errors
/// Returns `OutputError` if a record cannot be written.
pub fn tours_csv(tours: &[Arc<Tour>]) -> Result<String, OutputError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for tour in tours {
        writer.serialize(TourRow::from(tour.as_ref()))?;
    }
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}
