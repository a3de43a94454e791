//! `storefront show`: the product detail page.

use anyhow::Result;
use storefront_core::cart::QuantitySelector;
use storefront_core::catalog::CatalogSource;
use storefront_core::ProductId;

use super::ShowArgs;
use crate::context::Context;
use crate::views::detail::render_detail;

/// Run the show command.
///
/// An unknown id surfaces as `StorefrontError::ProductNotFound`, which the
/// top-level handler renders as the not-found page.
pub async fn run(args: ShowArgs, ctx: &Context) -> Result<()> {
    let id = ProductId::new(args.id);
    let source = ctx.catalog_source();

    let spinner = ctx.output.spinner(&format!("Loading {}...", id));
    let product = source.product(&id).await;
    spinner.finish_and_clear();
    let product = product?;

    if ctx.output.is_json() {
        ctx.output.json(&product);
        return Ok(());
    }

    let quantity = QuantitySelector::starting_at(args.quantity);
    ctx.output.block(&render_detail(&product, &quantity));
    Ok(())
}
