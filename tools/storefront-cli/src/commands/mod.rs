//! CLI command implementations.

pub mod config;
pub mod facets;
pub mod list;
pub mod shop;
pub mod show;

use clap::{Args, Subcommand};
use storefront_core::search::FilterSpec;
use storefront_core::Money;

use crate::context::Context;

/// Arguments for the list command.
#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// URL query string, e.g. "category=Bags&price=0-100".
    #[arg(short, long)]
    pub query: Option<String>,

    /// Restrict to a category (repeatable).
    #[arg(long)]
    pub category: Vec<String>,

    /// Restrict to a brand (repeatable).
    #[arg(short, long)]
    pub brand: Vec<String>,

    /// Upper price bound in dollars.
    #[arg(short = 'p', long)]
    pub max_price: Option<f64>,

    /// Free-text search.
    #[arg(short, long)]
    pub search: Option<String>,
}

impl ListArgs {
    /// Build the filter: configured defaults, then the query string, then
    /// explicit flags.
    pub fn filter_spec(&self, ctx: &Context) -> FilterSpec {
        let mut spec = match &self.query {
            Some(query) => ctx.base_filter().with_query_string(query),
            None => ctx.base_filter(),
        };

        spec.categories.extend(self.category.iter().cloned());
        spec.brands.extend(self.brand.iter().cloned());
        if let Some(max) = self.max_price {
            spec.price_ceiling = Money::from_dollars(max).non_negative();
        }
        if let Some(search) = &self.search {
            spec.search = search.clone();
        }
        spec
    }
}

/// Arguments for the show command.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Product id, e.g. "backpack-001".
    pub id: String,

    /// Quantity to price on the add-to-cart line.
    #[arg(short, long, default_value_t = 1)]
    pub quantity: u32,
}

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show the effective configuration.
    Show,
    /// Write a default storefront.toml in the current directory.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
