//! Storefront error types.

use crate::ids::ProductId;
use thiserror::Error;

/// Errors surfaced by catalog access.
///
/// Cart transitions and filtering are total and never produce one of these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorefrontError {
    /// The requested product id is not in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// The catalog could not be fetched.
    #[error("Catalog fetch failed: {0}")]
    FetchFailed(String),
}

impl StorefrontError {
    /// Whether this error means "absent" rather than "broken".
    pub fn is_not_found(&self) -> bool {
        matches!(self, StorefrontError::ProductNotFound(_))
    }
}

/// Result alias for storefront operations.
pub type Result<T, E = StorefrontError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = StorefrontError::ProductNotFound(ProductId::new("nope"));
        assert_eq!(err.to_string(), "Product not found: nope");
        assert!(err.is_not_found());

        let err = StorefrontError::FetchFailed("network unreachable".into());
        assert_eq!(err.to_string(), "Catalog fetch failed: network unreachable");
        assert!(!err.is_not_found());
    }
}
