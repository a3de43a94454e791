//! Prices and totals.
//!
//! The storefront sells in US dollars only. Amounts are whole cents so cart
//! totals are exact sums; arithmetic saturates instead of overflowing so cart
//! operations never fail.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// An amount of US dollars, in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money {
    pub amount_cents: i64,
}

impl Money {
    pub const ZERO: Money = Money::usd(0);

    pub const fn usd(amount_cents: i64) -> Self {
        Self { amount_cents }
    }

    /// Convert a dollar amount, rounding to the nearest cent. NaN maps to zero.
    ///
    /// ```
    /// use storefront_core::Money;
    /// assert_eq!(Money::from_dollars(75.50).amount_cents, 7550);
    /// ```
    pub fn from_dollars(dollars: f64) -> Self {
        Self::usd((dollars * 100.0).round() as i64)
    }

    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    pub fn is_negative(&self) -> bool {
        self.amount_cents < 0
    }

    /// Clamp negative amounts to zero.
    pub fn non_negative(self) -> Self {
        Self::usd(self.amount_cents.max(0))
    }

    pub fn to_dollars(&self) -> f64 {
        self.amount_cents as f64 / 100.0
    }

    /// Shop formatting, e.g. "$49.99".
    pub fn display(&self) -> String {
        let cents = self.amount_cents.unsigned_abs();
        let sign = if self.is_negative() { "-" } else { "" };
        format!("{}${}.{:02}", sign, cents / 100, cents % 100)
    }

    pub fn saturating_add(&self, other: &Money) -> Money {
        Money::usd(self.amount_cents.saturating_add(other.amount_cents))
    }

    /// Unit price times a quantity.
    pub fn saturating_mul(&self, quantity: u32) -> Money {
        Money::usd(self.amount_cents.saturating_mul(i64::from(quantity)))
    }

    /// `percent`% of this amount, rounded to the nearest cent.
    pub fn percentage(&self, percent: f64) -> Money {
        Money::usd((self.amount_cents as f64 * percent / 100.0).round() as i64)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        self.saturating_add(&other)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, m| acc.saturating_add(m))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}
