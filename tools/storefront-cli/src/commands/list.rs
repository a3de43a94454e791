//! `storefront list`: the listing page.

use anyhow::Result;
use serde::Serialize;
use storefront_core::catalog::{CatalogSource, Product};
use storefront_core::search::{load_visible_products, FilterSpec};

use super::ListArgs;
use crate::context::Context;
use crate::views::listing::{render_facets, render_listing};

#[derive(Serialize)]
struct ListingOutput<'a> {
    filter: &'a FilterSpec,
    count: usize,
    products: &'a [Product],
}

/// Run the list command.
pub async fn run(args: ListArgs, ctx: &Context) -> Result<()> {
    let spec = args.filter_spec(ctx);
    ctx.output.debug(&format!("filter: {:?}", spec));

    let source = ctx.catalog_source();
    let spinner = ctx.output.spinner("Loading products...");
    let (products, categories, brands) = futures::join!(
        load_visible_products(&source, &spec),
        source.categories(),
        source.brands(),
    );
    spinner.finish_and_clear();
    let products = products?;

    if ctx.output.is_json() {
        ctx.output.json(&ListingOutput {
            filter: &spec,
            count: products.len(),
            products: &products,
        });
        return Ok(());
    }

    // The sidebar is decoration; a failure there should not hide the listing.
    match (categories, brands) {
        (Ok(categories), Ok(brands)) if ctx.output.is_verbose() => {
            ctx.output.block(&render_facets("Category", &categories, &spec.categories, true));
            ctx.output.block(&render_facets("Brand", &brands, &spec.brands, false));
            println!();
        }
        (Err(e), _) | (_, Err(e)) => ctx.output.warn(&format!("Filters unavailable: {}", e)),
        _ => {}
    }

    ctx.output.block(&render_listing(&products, &spec));
    Ok(())
}
