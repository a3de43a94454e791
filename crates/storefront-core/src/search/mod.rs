//! Search module.
//!
//! Contains the filter specification, URL query parsing, and the filter
//! pipeline that turns a catalog into the visible product list.

mod engine;
mod filter;
mod query;

pub use engine::{load_visible_products, visible_products};
pub use filter::{FilterSpec, SelectionMode, DEFAULT_PRICE_CEILING};
