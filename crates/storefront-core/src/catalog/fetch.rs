//! Fetch state for views waiting on the catalog.

use crate::error::{Result, StorefrontError};
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// State of a catalog fetch as seen by a view.
#[derive(Debug, Clone, PartialEq)]
pub enum Loadable<T> {
    /// The fetch has not resolved yet.
    Pending,
    /// The fetch succeeded.
    Ready(T),
    /// The requested product does not exist.
    NotFound,
    /// The fetch failed; the message is shown to the user.
    Failed(String),
}

impl<T> Loadable<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, Loadable::Pending)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Loadable::Ready(_))
    }

    /// The loaded value, if any.
    pub fn ready(&self) -> Option<&T> {
        match self {
            Loadable::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// Map the loaded value, keeping other states.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Loadable<U> {
        match self {
            Loadable::Pending => Loadable::Pending,
            Loadable::Ready(value) => Loadable::Ready(f(value)),
            Loadable::NotFound => Loadable::NotFound,
            Loadable::Failed(message) => Loadable::Failed(message),
        }
    }
}

impl<T> Default for Loadable<T> {
    fn default() -> Self {
        Loadable::Pending
    }
}

impl<T> From<Result<T>> for Loadable<T> {
    fn from(result: Result<T>) -> Self {
        match result {
            Ok(value) => Loadable::Ready(value),
            Err(StorefrontError::ProductNotFound(_)) => Loadable::NotFound,
            Err(StorefrontError::FetchFailed(message)) => Loadable::Failed(message),
        }
    }
}

/// Liveness handle for a view that is waiting on a fetch.
///
/// Clones share state. Once any clone calls [`ViewScope::close`], results
/// delivered through the scope are dropped instead of applied. There is no
/// cancellation: the fetch itself runs to completion.
#[derive(Debug, Clone)]
pub struct ViewScope {
    active: Arc<AtomicBool>,
}

impl ViewScope {
    /// Open a new, active scope.
    pub fn new() -> Self {
        Self {
            active: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Mark the owning view as torn down.
    pub fn close(&self) {
        self.active.store(false, Ordering::Release);
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    /// Pass `value` through if the view is still active.
    pub fn accept<T>(&self, value: T) -> Option<T> {
        if self.is_active() {
            Some(value)
        } else {
            tracing::debug!("view closed before fetch resolved; result discarded");
            None
        }
    }

    /// Await `fetch` and convert its result, discarding it if the view was
    /// closed in the meantime.
    pub async fn load<T, F>(&self, fetch: F) -> Option<Loadable<T>>
    where
        F: Future<Output = Result<T>>,
    {
        let result = fetch.await;
        self.accept(Loadable::from(result))
    }
}

impl Default for ViewScope {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ProductId;

    #[test]
    fn test_loadable_from_result() {
        let ok: Loadable<u32> = Ok(3).into();
        assert_eq!(ok, Loadable::Ready(3));

        let missing: Loadable<u32> =
            Err(StorefrontError::ProductNotFound(ProductId::new("x"))).into();
        assert_eq!(missing, Loadable::NotFound);

        let failed: Loadable<u32> = Err(StorefrontError::FetchFailed("down".into())).into();
        assert_eq!(failed, Loadable::Failed("down".into()));
    }

    #[test]
    fn test_loadable_default_is_pending() {
        let state: Loadable<Vec<u8>> = Loadable::default();
        assert!(state.is_pending());
        assert!(state.ready().is_none());
    }

    #[test]
    fn test_closed_scope_discards() {
        let scope = ViewScope::new();
        let view_copy = scope.clone();
        assert_eq!(scope.accept(1), Some(1));

        view_copy.close();
        assert!(!scope.is_active());
        assert_eq!(scope.accept(2), None);
    }

    #[tokio::test]
    async fn test_load_after_close_is_discarded() {
        let scope = ViewScope::new();
        let fetch = {
            let scope = scope.clone();
            async move {
                scope.close();
                Ok::<_, StorefrontError>(42)
            }
        };
        assert_eq!(scope.load(fetch).await, None);
    }

    #[tokio::test]
    async fn test_load_active() {
        let scope = ViewScope::new();
        let loaded = scope.load(async { Ok::<_, StorefrontError>("ok") }).await;
        assert_eq!(loaded, Some(Loadable::Ready("ok")));
    }
}
