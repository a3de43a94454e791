//! Product detail page.

use std::fmt::Write as _;

use console::style;
use storefront_core::cart::QuantitySelector;
use storefront_core::catalog::Product;
use storefront_core::ProductId;

use super::stars;

pub fn render_detail(product: &Product, quantity: &QuantitySelector) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}",
        style(format!("Home / {} / {}", product.category, product.name)).dim()
    );
    let _ = writeln!(out, "\n{}", style(&product.name).bold().underlined());
    let _ = writeln!(
        out,
        "{} {}",
        stars(product),
        style(format!("({:.1})", product.rating)).dim()
    );
    let _ = writeln!(out, "{}", style(product.price.display()).green().bold());
    let _ = writeln!(out, "\n{} {}", style("Category:").dim(), product.category);
    let _ = writeln!(out, "{} {}", style("Brand:").dim(), product.brand);
    let _ = writeln!(out, "\n{}\n{}", style("Description").bold(), product.description);

    let line_total = product.price.saturating_mul(quantity.get());
    let _ = writeln!(
        out,
        "\n{} {}   {}",
        style("Quantity:").dim(),
        quantity.get(),
        style(format!("Add to Cart - {}", line_total.display())).cyan()
    );
    out
}

/// Shown for an id that is not in the catalog.
pub fn render_not_found(id: &ProductId) -> String {
    format!(
        "{}\n{}\n{}",
        style("Product Not Found").bold(),
        style(format!("No product with id \"{}\".", id)).dim(),
        "← Back to Products"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::catalog::Catalog;

    #[test]
    fn test_detail_shows_fields_and_line_total() {
        let catalog = Catalog::seed();
        let product = catalog.get(&ProductId::new("wireless-headphones-001")).unwrap();
        let mut quantity = QuantitySelector::new();
        quantity.increment();

        let view = console::strip_ansi_codes(&render_detail(product, &quantity)).to_string();
        assert!(view.contains("Home / Electronics / Premium Wireless Headphones"));
        assert!(view.contains("Brand: SoundWave"));
        assert!(view.contains("Quantity: 2"));
        assert!(view.contains("Add to Cart - $399.98"));
    }

    #[test]
    fn test_not_found_view() {
        let view = render_not_found(&ProductId::new("hoverboard-001"));
        let view = console::strip_ansi_codes(&view);
        assert!(view.contains("Product Not Found"));
        assert!(view.contains("hoverboard-001"));
    }
}
