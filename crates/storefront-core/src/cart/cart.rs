//! Cart state and its reducer.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed per cart item. Larger requests are clamped.
pub const MAX_QUANTITY_PER_ITEM: u32 = 9999;

/// The product fields a cart line snapshots when it is added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRef {
    pub id: ProductId,
    pub name: String,
    pub price: Money,
    pub image: String,
}

impl From<&Product> for ProductRef {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
        }
    }
}

/// A product held in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Product this line refers to. Unique within a cart.
    pub id: ProductId,
    /// Product name at add-time.
    pub name: String,
    /// Unit price at add-time.
    pub price: Money,
    /// Image URI at add-time.
    pub image: String,
    /// Always at least 1 while the item is in the cart.
    pub quantity: u32,
}

impl CartItem {
    fn new(product: ProductRef) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            image: product.image,
            quantity: 1,
        }
    }

    /// Unit price times quantity.
    pub fn line_total(&self) -> Money {
        self.price.saturating_mul(self.quantity)
    }
}

/// An operation on the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum CartAction {
    /// Add one unit of a product.
    Add(ProductRef),
    /// Set an item's quantity; zero or less removes it.
    UpdateQuantity { id: ProductId, quantity: i64 },
    /// Remove an item.
    Remove(ProductId),
    /// Empty the cart.
    Clear,
}

/// The cart: ordered items plus their total.
///
/// Fields are private so the total cannot drift from the items; it is
/// recomputed after every transition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartState {
    items: Vec<CartItem>,
    total: Money,
}

impl Default for CartState {
    fn default() -> Self {
        Self::new()
    }
}

impl CartState {
    /// An empty cart.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            total: Money::ZERO,
        }
    }

    /// Items in the order they were first added.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Sum of price times quantity over all items.
    pub fn total(&self) -> Money {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct products.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Total number of units (sum of quantities).
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Look up an item by product id.
    pub fn get(&self, id: &ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| &i.id == id)
    }

    /// Quantity of a product in the cart, zero when absent.
    pub fn quantity_of(&self, id: &ProductId) -> u32 {
        self.get(id).map_or(0, |i| i.quantity)
    }

    /// Apply `action` in place.
    ///
    /// Never fails: unknown ids are no-ops and quantities are clamped to
    /// `1..=MAX_QUANTITY_PER_ITEM`.
    pub fn apply(&mut self, action: CartAction) {
        match action {
            CartAction::Add(product) => {
                if let Some(existing) = self.items.iter_mut().find(|i| i.id == product.id) {
                    existing.quantity = existing
                        .quantity
                        .saturating_add(1)
                        .min(MAX_QUANTITY_PER_ITEM);
                } else {
                    self.items.push(CartItem::new(product));
                }
            }
            CartAction::UpdateQuantity { id, quantity } => {
                if quantity <= 0 {
                    self.remove(&id);
                } else if let Some(item) = self.items.iter_mut().find(|i| i.id == id) {
                    item.quantity = u32::try_from(quantity)
                        .unwrap_or(MAX_QUANTITY_PER_ITEM)
                        .min(MAX_QUANTITY_PER_ITEM);
                }
            }
            CartAction::Remove(id) => self.remove(&id),
            CartAction::Clear => self.items.clear(),
        }
        self.recompute_total();
    }

    fn remove(&mut self, id: &ProductId) {
        self.items.retain(|i| &i.id != id);
    }

    fn recompute_total(&mut self) {
        self.total = self.items.iter().map(CartItem::line_total).sum();
    }
}

/// Pure reducer: the state after applying `action` to `state`.
pub fn reduce(mut state: CartState, action: CartAction) -> CartState {
    state.apply(action);
    state
}
