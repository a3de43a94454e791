//! Quantity picker on the product detail view.

use crate::cart::MAX_QUANTITY_PER_ITEM;

/// How many units the next "add to cart" will add. Never below 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantitySelector(u32);

impl QuantitySelector {
    pub fn new() -> Self {
        Self(1)
    }

    /// Start at `quantity`, clamped to `1..=MAX_QUANTITY_PER_ITEM`.
    pub fn starting_at(quantity: u32) -> Self {
        Self(quantity.clamp(1, MAX_QUANTITY_PER_ITEM))
    }

    pub fn get(&self) -> u32 {
        self.0
    }

    pub fn increment(&mut self) {
        self.0 = (self.0 + 1).min(MAX_QUANTITY_PER_ITEM);
    }

    pub fn decrement(&mut self) {
        self.0 = self.0.saturating_sub(1).max(1);
    }
}

impl Default for QuantitySelector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_never_below_one() {
        let mut q = QuantitySelector::new();
        q.decrement();
        q.decrement();
        assert_eq!(q.get(), 1);
        q.increment();
        q.increment();
        assert_eq!(q.get(), 3);
        q.decrement();
        assert_eq!(q.get(), 2);
    }

    #[test]
    fn test_clamped_start_and_ceiling() {
        assert_eq!(QuantitySelector::starting_at(0).get(), 1);
        let mut q = QuantitySelector::starting_at(u32::MAX);
        assert_eq!(q.get(), MAX_QUANTITY_PER_ITEM);
        q.increment();
        assert_eq!(q.get(), MAX_QUANTITY_PER_ITEM);
    }
}
