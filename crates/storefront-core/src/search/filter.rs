//! Filter specification.

use crate::catalog::search_needle;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Upper price bound used when none is given ($1000.00).
pub const DEFAULT_PRICE_CEILING: Money = Money::usd(100_000);

/// How clicking a category in the sidebar changes the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// Radio semantics: selecting a category replaces the current one.
    #[default]
    Single,
    /// Checkbox semantics: categories accumulate.
    Multi,
}

impl SelectionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionMode::Single => "single",
            SelectionMode::Multi => "multi",
        }
    }
}

/// User-chosen narrowing criteria for the listing.
///
/// Empty category and brand sets mean "no restriction". The default spec
/// matches every product priced between $0 and [`DEFAULT_PRICE_CEILING`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Accepted categories.
    pub categories: BTreeSet<String>,
    /// Accepted brands.
    pub brands: BTreeSet<String>,
    /// Inclusive lower price bound.
    pub price_floor: Money,
    /// Inclusive upper price bound.
    pub price_ceiling: Money,
    /// Free-text search term. Blank means no text restriction.
    pub search: String,
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self {
            categories: BTreeSet::new(),
            brands: BTreeSet::new(),
            price_floor: Money::ZERO,
            price_ceiling: DEFAULT_PRICE_CEILING,
            search: String::new(),
        }
    }
}

impl FilterSpec {
    /// A spec that matches the whole catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to a category (adds to the set).
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.categories.insert(category.into());
        self
    }

    /// Restrict to a brand (adds to the set).
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brands.insert(brand.into());
        self
    }

    /// Set the inclusive upper price bound.
    pub fn with_price_ceiling(mut self, ceiling: Money) -> Self {
        self.price_ceiling = ceiling;
        self
    }

    /// Set the inclusive lower price bound.
    pub fn with_price_floor(mut self, floor: Money) -> Self {
        self.price_floor = floor.non_negative();
        self
    }

    /// Set the search term.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// The trimmed, lowercased search term, or `None` when blank.
    pub fn search_needle(&self) -> Option<String> {
        search_needle(&self.search)
    }

    /// Whether this spec restricts nothing beyond the default price range.
    pub fn is_unrestricted(&self) -> bool {
        *self == Self::default()
    }

    /// Toggle a category the way the sidebar does.
    ///
    /// Clicking a selected category deselects it. Clicking an unselected one
    /// replaces the selection in [`SelectionMode::Single`] and adds to it in
    /// [`SelectionMode::Multi`].
    pub fn toggle_category(&mut self, category: &str, mode: SelectionMode) {
        if self.categories.remove(category) {
            return;
        }
        if mode == SelectionMode::Single {
            self.categories.clear();
        }
        self.categories.insert(category.to_string());
    }

    /// Select "All" categories.
    pub fn clear_categories(&mut self) {
        self.categories.clear();
    }

    /// Toggle a brand. Brands are always multi-select.
    pub fn toggle_brand(&mut self, brand: &str) {
        if !self.brands.remove(brand) {
            self.brands.insert(brand.to_string());
        }
    }

    /// Reset every dimension to its default ("Clear All").
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
