//! The cart store.
//!
//! One store instance owns the session's cart. Views receive it explicitly
//! and change it only through [`CartStore::dispatch`]; subscribers are told
//! about every transition.

use crate::cart::{CartAction, CartState, CartSummary, ProductRef, TaxRate};
use std::fmt;

/// Handle returned by [`CartStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn Fn(&CartState) + Send + Sync>;

/// Owner of the session cart.
pub struct CartStore {
    state: CartState,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl CartStore {
    /// A store holding an empty cart.
    pub fn new() -> Self {
        Self {
            state: CartState::new(),
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Current cart.
    pub fn state(&self) -> &CartState {
        &self.state
    }

    /// Apply an action and notify subscribers.
    pub fn dispatch(&mut self, action: CartAction) -> &CartState {
        tracing::debug!(?action, "cart dispatch");
        self.state.apply(action);
        tracing::debug!(
            lines = self.state.line_count(),
            units = self.state.item_count(),
            total = %self.state.total(),
            "cart updated"
        );
        for (_, subscriber) in &self.subscribers {
            subscriber(&self.state);
        }
        &self.state
    }

    /// Add `quantity` units of a product, one `Add` at a time.
    ///
    /// A quantity of zero dispatches nothing.
    pub fn add_many(&mut self, product: impl Into<ProductRef>, quantity: u32) -> &CartState {
        let product = product.into();
        for _ in 0..quantity {
            self.dispatch(CartAction::Add(product.clone()));
        }
        &self.state
    }

    /// Register a callback run after every transition.
    pub fn subscribe<F>(&mut self, subscriber: F) -> SubscriptionId
    where
        F: Fn(&CartState) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Remove a subscriber. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() < before
    }

    /// Order summary for the current cart.
    pub fn summary(&self, tax: TaxRate) -> CartSummary {
        CartSummary::for_cart(&self.state, tax)
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::ids::ProductId;
    use crate::money::Money;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn shoes() -> ProductRef {
        let catalog = Catalog::seed();
        catalog
            .get(&ProductId::new("running-shoes-001"))
            .map(ProductRef::from)
            .unwrap()
    }

    #[test]
    fn test_dispatch_notifies_subscribers() {
        let mut store = CartStore::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        store.subscribe(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });

        store.dispatch(CartAction::Add(shoes()));
        store.dispatch(CartAction::Clear);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_subscriber_sees_new_state() {
        let mut store = CartStore::new();
        let last_count = Arc::new(AtomicUsize::new(usize::MAX));
        let sink = Arc::clone(&last_count);
        store.subscribe(move |state| {
            sink.store(state.item_count() as usize, Ordering::SeqCst);
        });

        store.add_many(shoes(), 3);
        assert_eq!(last_count.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_unsubscribe() {
        let mut store = CartStore::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        let id = store.subscribe(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });

        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.dispatch(CartAction::Add(shoes()));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_add_many() {
        let mut store = CartStore::new();
        let state = store.add_many(shoes(), 2);
        assert_eq!(state.items()[0].quantity, 2);
        assert_eq!(state.total(), Money::usd(24000));

        store.add_many(shoes(), 0);
        assert_eq!(store.state().items()[0].quantity, 2);
    }
}
