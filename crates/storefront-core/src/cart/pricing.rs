//! Order summary shown next to the cart.

use crate::cart::CartState;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Sales tax as a percentage of the subtotal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaxRate(f64);

impl TaxRate {
    /// The storefront's default 8% rate.
    pub const DEFAULT: TaxRate = TaxRate(8.0);

    /// Create a rate from a percentage. Negative or non-finite input is
    /// treated as zero.
    pub fn from_percent(percent: f64) -> Self {
        if percent.is_finite() && percent > 0.0 {
            Self(percent)
        } else {
            Self(0.0)
        }
    }

    pub fn percent(&self) -> f64 {
        self.0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Totals for the cart page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartSummary {
    /// Number of units.
    pub item_count: u64,
    /// Number of distinct products.
    pub line_count: usize,
    /// Cart total before tax.
    pub subtotal: Money,
    /// Shipping is always free.
    pub shipping: Money,
    /// Tax on the subtotal.
    pub tax: Money,
    /// Subtotal plus shipping plus tax.
    pub grand_total: Money,
}

impl CartSummary {
    /// Summarize `cart` at the given tax rate.
    pub fn for_cart(cart: &CartState, tax_rate: TaxRate) -> Self {
        let subtotal = cart.total();
        let shipping = Money::ZERO;
        let tax = subtotal.percentage(tax_rate.percent());
        Self {
            item_count: cart.item_count(),
            line_count: cart.line_count(),
            subtotal,
            shipping,
            tax,
            grand_total: subtotal + shipping + tax,
        }
    }

    pub fn is_free_shipping(&self) -> bool {
        self.shipping.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::{CartAction, ProductRef};
    use crate::ids::ProductId;

    fn cart_with(cents: i64, quantity: i64) -> CartState {
        let mut cart = CartState::new();
        let id = ProductId::new("p");
        cart.apply(CartAction::Add(ProductRef {
            id: id.clone(),
            name: "P".into(),
            price: Money::usd(cents),
            image: String::new(),
        }));
        cart.apply(CartAction::UpdateQuantity { id, quantity });
        cart
    }

    #[test]
    fn test_summary_default_tax() {
        let summary = CartSummary::for_cart(&cart_with(12000, 2), TaxRate::default());
        assert_eq!(summary.item_count, 2);
        assert_eq!(summary.line_count, 1);
        assert_eq!(summary.subtotal, Money::usd(24000));
        assert_eq!(summary.tax, Money::usd(1920));
        assert_eq!(summary.grand_total, Money::usd(25920));
        assert!(summary.is_free_shipping());
    }

    #[test]
    fn test_summary_empty_cart() {
        let summary = CartSummary::for_cart(&CartState::new(), TaxRate::default());
        assert!(summary.subtotal.is_zero());
        assert!(summary.grand_total.is_zero());
    }

    #[test]
    fn test_tax_rate_sanitized() {
        assert_eq!(TaxRate::from_percent(-3.0).percent(), 0.0);
        assert_eq!(TaxRate::from_percent(f64::NAN).percent(), 0.0);
        assert_eq!(TaxRate::from_percent(20.0).percent(), 20.0);
    }

    #[test]
    fn test_zero_tax() {
        let summary = CartSummary::for_cart(&cart_with(2999, 1), TaxRate::from_percent(0.0));
        assert_eq!(summary.grand_total, Money::usd(2999));
    }
}
