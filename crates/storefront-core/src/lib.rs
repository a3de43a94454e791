//! Catalog, filtering and cart logic for the storefront.
//!
//! - **Catalog**: the fixed product list and an asynchronous accessor over it
//! - **Search**: filter specification, URL query parsing, the filter pipeline
//! - **Cart**: reducer, session store, order summary
//!
//! # Example
//!
//! ```rust
//! use storefront_core::prelude::*;
//!
//! let catalog = Catalog::seed();
//! let spec = FilterSpec::from_query_string("brand=SoundWave");
//! let visible = visible_products(catalog.products(), &spec);
//! assert_eq!(visible.len(), 2);
//!
//! let mut cart = CartStore::new();
//! cart.add_many(&visible[0], 2);
//! let summary = cart.summary(TaxRate::default());
//! assert_eq!(summary.item_count, 2);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod search;

pub use error::{Result, StorefrontError};
pub use ids::ProductId;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{Result, StorefrontError};
    pub use crate::ids::ProductId;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{Catalog, CatalogSource, Loadable, MockCatalog, Product, ViewScope};

    // Cart
    pub use crate::cart::{
        reduce, CartAction, CartItem, CartState, CartStore, CartSummary, ProductRef,
        QuantitySelector, TaxRate,
    };

    // Search
    pub use crate::search::{load_visible_products, visible_products, FilterSpec, SelectionMode};
}
