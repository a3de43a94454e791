//! Cart page and order summary.

use std::fmt::Write as _;

use console::style;
use storefront_core::cart::{CartState, CartSummary, TaxRate};

pub fn render_cart(cart: &CartState, tax_rate: TaxRate) -> String {
    if cart.is_empty() {
        return format!(
            "{}\n{}",
            style("Your Cart is Empty").bold(),
            "Add some products to get started!"
        );
    }

    let mut out = String::new();
    let _ = writeln!(out, "{}", style("Shopping Cart").bold().underlined());
    for item in cart.items() {
        let _ = writeln!(
            out,
            "  {:<32} {:>10} x {:<4} {:>12}  {}",
            item.name,
            item.price.display(),
            item.quantity,
            style(item.line_total().display()).bold(),
            style(&item.id).dim()
        );
    }

    let summary = CartSummary::for_cart(cart, tax_rate);
    let _ = write!(out, "\n{}", render_summary(&summary, tax_rate));
    out
}

pub fn render_summary(summary: &CartSummary, tax_rate: TaxRate) -> String {
    let shipping = if summary.is_free_shipping() {
        "Free".to_string()
    } else {
        summary.shipping.display()
    };

    let mut out = String::new();
    let _ = writeln!(out, "{}", style("Order Summary").bold());
    let _ = writeln!(
        out,
        "  {:<24} {:>12}",
        format!("Subtotal ({} items)", summary.item_count),
        summary.subtotal.display()
    );
    let _ = writeln!(out, "  {:<24} {:>12}", "Shipping", shipping);
    let _ = writeln!(
        out,
        "  {:<24} {:>12}",
        format!("Tax ({}%)", tax_rate.percent()),
        summary.tax.display()
    );
    let _ = writeln!(
        out,
        "  {:<24} {:>12}",
        style("Total").bold(),
        style(summary.grand_total.display()).bold()
    );
    out
}

/// Prompt badge, e.g. `cart(3)`.
pub fn badge(item_count: u64) -> String {
    if item_count == 0 {
        style("cart").dim().to_string()
    } else {
        style(format!("cart({})", item_count)).cyan().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::cart::{CartAction, ProductRef};
    use storefront_core::catalog::Catalog;
    use storefront_core::ProductId;

    fn plain(s: &str) -> String {
        console::strip_ansi_codes(s).to_string()
    }

    #[test]
    fn test_empty_cart() {
        let view = plain(&render_cart(&CartState::new(), TaxRate::default()));
        assert!(view.contains("Your Cart is Empty"));
        assert!(view.contains("Add some products to get started!"));
    }

    #[test]
    fn test_cart_with_items() {
        let catalog = Catalog::seed();
        let shoes = catalog.get(&ProductId::new("running-shoes-001")).unwrap();
        let mut cart = CartState::new();
        cart.apply(CartAction::Add(ProductRef::from(shoes)));
        cart.apply(CartAction::Add(ProductRef::from(shoes)));

        let view = plain(&render_cart(&cart, TaxRate::default()));
        assert!(view.contains("Performance Running Shoes"));
        assert!(view.contains("$240.00"));
        assert!(view.contains("Subtotal (2 items)"));
        assert!(view.contains("Free"));
        assert!(view.contains("Tax (8%)"));
        assert!(view.contains("$19.20"));
        assert!(view.contains("$259.20"));
    }

    #[test]
    fn test_badge() {
        assert_eq!(plain(&badge(0)), "cart");
        assert_eq!(plain(&badge(3)), "cart(3)");
    }
}
