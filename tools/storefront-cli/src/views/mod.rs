//! Terminal renderings of the storefront pages.
//!
//! Every view is a pure function returning a styled string; commands decide
//! where it is printed.

pub mod cart;
pub mod detail;
pub mod listing;

use console::style;
use storefront_core::catalog::{Product, MAX_RATING};

/// Five-star rating strip, filled stars first.
pub fn stars(product: &Product) -> String {
    let filled = usize::from(product.filled_stars());
    let empty = (MAX_RATING as usize).saturating_sub(filled);
    format!(
        "{}{}",
        style("★".repeat(filled)).yellow(),
        style("☆".repeat(empty)).dim()
    )
}

/// Shown when a catalog fetch fails.
pub fn error_view(message: &str) -> String {
    format!(
        "{}\n{}\n{}",
        style("Something went wrong").red().bold(),
        message,
        style("Try again in a moment.").dim()
    )
}
