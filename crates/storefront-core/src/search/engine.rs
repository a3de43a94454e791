//! The filter pipeline.

use crate::catalog::{CatalogSource, Product};
use crate::error::Result;
use crate::search::FilterSpec;

/// Products from `catalog` that satisfy every criterion in `spec`, in
/// catalog order.
///
/// Stages run in sequence (text, category, price, brand). Each is an
/// independent conjunct, so the order only affects how much work later
/// stages do. An empty result means "no matches".
pub fn visible_products(catalog: &[Product], spec: &FilterSpec) -> Vec<Product> {
    let needle = spec.search_needle();

    let visible: Vec<Product> = catalog
        .iter()
        .filter(|p| needle.as_deref().map_or(true, |n| p.matches_text(n)))
        .filter(|p| spec.categories.is_empty() || spec.categories.contains(&p.category))
        .filter(|p| {
            p.price.amount_cents >= spec.price_floor.amount_cents
                && p.price.amount_cents <= spec.price_ceiling.amount_cents
        })
        .filter(|p| spec.brands.is_empty() || spec.brands.contains(&p.brand))
        .cloned()
        .collect();

    tracing::debug!(
        candidates = catalog.len(),
        visible = visible.len(),
        "applied filter spec"
    );
    visible
}

/// Fetch the catalog from `source` and filter it.
pub async fn load_visible_products<S>(source: &S, spec: &FilterSpec) -> Result<Vec<Product>>
where
    S: CatalogSource + ?Sized,
{
    let products = source.all_products().await?;
    Ok(visible_products(&products, spec))
}
