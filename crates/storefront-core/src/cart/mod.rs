//! Shopping cart module.
//!
//! Contains the cart reducer, the store that owns a session's cart, the
//! detail-page quantity picker, and the order summary.

mod cart;
mod pricing;
mod quantity;
mod store;

pub use cart::{reduce, CartAction, CartItem, CartState, ProductRef, MAX_QUANTITY_PER_ITEM};
pub use pricing::{CartSummary, TaxRate};
pub use quantity::QuantitySelector;
pub use store::{CartStore, SubscriptionId};
