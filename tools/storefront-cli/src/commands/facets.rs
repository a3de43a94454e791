//! `storefront categories` and `storefront brands`.

use anyhow::Result;
use storefront_core::catalog::CatalogSource;

use crate::context::Context;

/// Which distinct product attribute to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facet {
    Category,
    Brand,
}

impl Facet {
    fn title(self) -> &'static str {
        match self {
            Facet::Category => "Categories",
            Facet::Brand => "Brands",
        }
    }
}

/// Run the categories or brands command.
pub async fn run(facet: Facet, ctx: &Context) -> Result<()> {
    let source = ctx.catalog_source();
    let spinner = ctx.output.spinner(&format!("Loading {}...", facet.title().to_lowercase()));
    let values = match facet {
        Facet::Category => source.categories().await,
        Facet::Brand => source.brands().await,
    };
    spinner.finish_and_clear();
    let values = values?;

    if ctx.output.is_json() {
        ctx.output.json(&values);
        return Ok(());
    }

    ctx.output.header(facet.title());
    for value in &values {
        ctx.output.list_item(value);
    }
    Ok(())
}
