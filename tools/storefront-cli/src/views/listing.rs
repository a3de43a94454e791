//! Product listing and filter sidebar.

use std::collections::BTreeSet;
use std::fmt::Write as _;

use console::style;
use storefront_core::catalog::Product;
use storefront_core::search::{FilterSpec, DEFAULT_PRICE_CEILING};

use super::stars;

/// One product card: name, price, rating and where it sits in the catalog.
pub fn product_card(product: &Product) -> String {
    format!(
        "{} {}  {}\n    {} {}  {}",
        style("▸").cyan(),
        style(&product.name).bold(),
        style(product.price.display()).green(),
        stars(product),
        style(format!("{:.1}", product.rating)).dim(),
        style(format!("{} · {} · {}", product.category, product.brand, product.id)).dim(),
    )
}

/// The listing page for already-filtered products.
pub fn render_listing(products: &[Product], spec: &FilterSpec) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} {}",
        style("Product Listing").bold().underlined(),
        style(format!("({} results)", products.len())).dim()
    );
    if let Some(summary) = active_filters(spec) {
        let _ = writeln!(out, "{}", style(summary).dim());
    }

    if products.is_empty() {
        let _ = writeln!(out, "\nNo products match the current filters.");
        return out;
    }

    for product in products {
        let _ = writeln!(out, "\n{}", product_card(product));
    }
    out
}

/// One-line description of everything the spec restricts, or `None` when it
/// restricts nothing.
pub fn active_filters(spec: &FilterSpec) -> Option<String> {
    let mut parts = Vec::new();
    if !spec.categories.is_empty() {
        parts.push(format!("category: {}", join(&spec.categories)));
    }
    if !spec.brands.is_empty() {
        parts.push(format!("brand: {}", join(&spec.brands)));
    }
    if !spec.price_floor.is_zero() || spec.price_ceiling != DEFAULT_PRICE_CEILING {
        parts.push(format!(
            "price: {} - {}",
            spec.price_floor.display(),
            spec.price_ceiling.display()
        ));
    }
    if let Some(needle) = spec.search_needle() {
        parts.push(format!("search: \"{}\"", needle));
    }
    (!parts.is_empty()).then(|| format!("Filters ({})", parts.join("; ")))
}

fn join(values: &BTreeSet<String>) -> String {
    values.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
}

/// The sidebar's facet list with the current selection marked.
///
/// Categories get a leading "All" entry that is selected when nothing else is.
pub fn render_facets(title: &str, values: &[String], selected: &BTreeSet<String>, with_all: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", style(title).bold());
    if with_all {
        let _ = writeln!(out, "  {} All", marker(selected.is_empty()));
    }
    for value in values {
        let _ = writeln!(out, "  {} {}", marker(selected.contains(value)), value);
    }
    out
}

fn marker(on: bool) -> String {
    if on {
        style("[x]").green().to_string()
    } else {
        style("[ ]").dim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::catalog::Catalog;
    use storefront_core::search::visible_products;
    use storefront_core::Money;

    fn plain(s: &str) -> String {
        console::strip_ansi_codes(s).to_string()
    }

    #[test]
    fn test_listing_shows_every_card() {
        let catalog = Catalog::seed();
        let view = plain(&render_listing(catalog.products(), &FilterSpec::new()));
        assert!(view.contains("(11 results)"));
        assert!(view.contains("Premium Wireless Headphones"));
        assert!(view.contains("$120.00"));
        assert!(!view.contains("Filters ("));
    }

    #[test]
    fn test_empty_listing() {
        let spec = FilterSpec::new().with_search("zzz");
        let visible = visible_products(Catalog::seed().products(), &spec);
        let view = plain(&render_listing(&visible, &spec));
        assert!(view.contains("(0 results)"));
        assert!(view.contains("No products match the current filters."));
        assert!(view.contains("search: \"zzz\""));
    }

    #[test]
    fn test_active_filters_summary() {
        let spec = FilterSpec::new()
            .with_category("Bags")
            .with_brand("UrbanPack")
            .with_price_ceiling(Money::usd(5000));
        assert_eq!(
            active_filters(&spec).as_deref(),
            Some("Filters (category: Bags; brand: UrbanPack; price: $0.00 - $50.00)")
        );
        assert_eq!(active_filters(&FilterSpec::new()), None);
    }

    #[test]
    fn test_facets_mark_selection() {
        let values = vec!["Bags".to_string(), "Footwear".to_string()];
        let none = plain(&render_facets("Category", &values, &BTreeSet::new(), true));
        assert!(none.contains("[x] All"));
        assert!(none.contains("[ ] Bags"));

        let selected: BTreeSet<String> = ["Footwear".to_string()].into();
        let some = plain(&render_facets("Category", &values, &selected, true));
        assert!(some.contains("[ ] All"));
        assert!(some.contains("[x] Footwear"));

        let brands = plain(&render_facets("Brand", &values, &selected, false));
        assert!(!brands.contains("All"));
    }
}
