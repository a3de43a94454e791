//! Asynchronous catalog access.

use crate::catalog::{distinct, search_needle, Catalog, Product};
use crate::error::{Result, StorefrontError};
use crate::ids::ProductId;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// Artificial delay applied by [`MockCatalog`] to every call.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(100);

/// Read access to a product catalog.
///
/// Every call may suspend. Implementations backed by a real service return
/// [`StorefrontError::FetchFailed`] when the service cannot be reached.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// All products in catalog order.
    async fn all_products(&self) -> Result<Vec<Product>>;

    /// A single product. Unknown ids yield [`StorefrontError::ProductNotFound`].
    async fn product(&self, id: &ProductId) -> Result<Product>;

    /// Products whose category equals `category` exactly.
    async fn products_in_category(&self, category: &str) -> Result<Vec<Product>>;

    /// Case-insensitive text search over name, description, category and brand.
    /// The query is normalized by [`search_needle`]; a blank query matches
    /// every product.
    async fn search(&self, query: &str) -> Result<Vec<Product>>;

    /// Distinct categories in first-seen order.
    async fn categories(&self) -> Result<Vec<String>> {
        let products = self.all_products().await?;
        Ok(distinct(products.iter().map(|p| p.category.as_str())))
    }

    /// Distinct brands in first-seen order.
    async fn brands(&self) -> Result<Vec<String>> {
        let products = self.all_products().await?;
        Ok(distinct(products.iter().map(|p| p.brand.as_str())))
    }
}

/// In-memory catalog that simulates network latency.
///
/// Optionally fails every call, which exercises the error path of views.
#[derive(Debug, Clone)]
pub struct MockCatalog {
    catalog: Arc<Catalog>,
    latency: Duration,
    fail: bool,
}

impl MockCatalog {
    /// Serve `catalog` with the default latency.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
            latency: DEFAULT_LATENCY,
            fail: false,
        }
    }

    /// Serve the built-in seed catalog.
    pub fn seeded() -> Self {
        Self::new(Catalog::seed())
    }

    /// Set the artificial latency.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Make every call fail with [`StorefrontError::FetchFailed`].
    pub fn with_failure(mut self, fail: bool) -> Self {
        self.fail = fail;
        self
    }

    /// The underlying catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    async fn round_trip(&self, operation: &'static str) -> Result<&Catalog> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        if self.fail {
            tracing::warn!(operation, "simulated catalog failure");
            return Err(StorefrontError::FetchFailed(format!(
                "{} unavailable (simulated outage)",
                operation
            )));
        }
        tracing::debug!(operation, latency_ms = self.latency.as_millis() as u64, "catalog call");
        Ok(&self.catalog)
    }
}

impl Default for MockCatalog {
    fn default() -> Self {
        Self::seeded()
    }
}

#[async_trait]
impl CatalogSource for MockCatalog {
    async fn all_products(&self) -> Result<Vec<Product>> {
        let catalog = self.round_trip("all_products").await?;
        Ok(catalog.products().to_vec())
    }

    async fn product(&self, id: &ProductId) -> Result<Product> {
        let catalog = self.round_trip("product").await?;
        catalog
            .get(id)
            .cloned()
            .ok_or_else(|| StorefrontError::ProductNotFound(id.clone()))
    }

    async fn products_in_category(&self, category: &str) -> Result<Vec<Product>> {
        let catalog = self.round_trip("products_in_category").await?;
        Ok(catalog.in_category(category).cloned().collect())
    }

    async fn search(&self, query: &str) -> Result<Vec<Product>> {
        let catalog = self.round_trip("search").await?;
        let needle = search_needle(query);
        Ok(catalog
            .products()
            .iter()
            .filter(|p| needle.as_deref().map_or(true, |n| p.matches_text(n)))
            .cloned()
            .collect())
    }
}
