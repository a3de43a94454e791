//! Storefront CLI - browse the catalog and shop from the terminal.
//!
//! Commands:
//! - `storefront list` - Product listing with filters
//! - `storefront show` - Product detail page
//! - `storefront categories` / `storefront brands` - Distinct facet values
//! - `storefront shop` - Interactive session with a cart
//! - `storefront config` - Manage configuration

mod commands;
mod config;
mod context;
mod logging;
mod output;
mod views;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use storefront_core::StorefrontError;

use commands::facets::Facet;
use commands::{ConfigArgs, ListArgs, ShowArgs};
use output::Output;

/// Storefront CLI - browse the catalog and shop from the terminal
#[derive(Parser)]
#[command(name = "storefront")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products, optionally filtered
    List(ListArgs),

    /// Show a product's detail page
    Show(ShowArgs),

    /// List product categories
    Categories,

    /// List product brands
    Brands,

    /// Start an interactive shopping session
    Shop,

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = Output::new(cli.verbose, cli.json);

    let ctx = match context::Context::load(cli.config.as_deref(), output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    logging::init(&ctx.config.logging, cli.verbose, cli.json);

    let result = match cli.command {
        Commands::List(args) => commands::list::run(args, &ctx).await,
        Commands::Show(args) => commands::show::run(args, &ctx).await,
        Commands::Categories => commands::facets::run(Facet::Category, &ctx).await,
        Commands::Brands => commands::facets::run(Facet::Brand, &ctx).await,
        Commands::Shop => commands::shop::run(&ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        report(&e, &ctx.output);
        std::process::exit(1);
    }

    Ok(())
}

/// Print a command failure. Catalog errors get their page views.
fn report(err: &anyhow::Error, output: &Output) {
    if output.is_json() {
        output.error(&format!("{:#}", err));
        return;
    }

    match err.downcast_ref::<StorefrontError>() {
        Some(StorefrontError::ProductNotFound(id)) => {
            eprintln!("{}", views::detail::render_not_found(id));
        }
        Some(StorefrontError::FetchFailed(_)) => {
            eprintln!("{}", views::error_view(&err.to_string()));
        }
        None => output.error(&format!("{:#}", err)),
    }
}
