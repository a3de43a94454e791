//! Product catalog.
//!
//! The catalog is an immutable, ordered list of products. Views reach it
//! through a [`CatalogSource`] so a network-backed catalog can replace the
//! bundled [`MockCatalog`] without touching filtering or the cart.

mod data;
mod fetch;
mod product;
mod source;

pub use fetch::{Loadable, ViewScope};
pub use product::{search_needle, Product, MAX_RATING};
pub use source::{CatalogSource, MockCatalog, DEFAULT_LATENCY};

use crate::ids::ProductId;
use std::collections::HashSet;

/// An immutable, ordered collection of products.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from products in display order.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The built-in eleven-product catalog.
    pub fn seed() -> Self {
        Self::new(data::seed_products())
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by id.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Products whose category equals `category` exactly.
    pub fn in_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Product> + 'a {
        self.products.iter().filter(move |p| p.category == category)
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        distinct(self.products.iter().map(|p| p.category.as_str()))
    }

    /// Distinct brands in first-seen order.
    pub fn brands(&self) -> Vec<String> {
        distinct(self.products.iter().map(|p| p.brand.as_str()))
    }
}

pub(crate) fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect()
}
