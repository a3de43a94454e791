//! `storefront shop`: an interactive session with an in-memory cart.
//!
//! Each input line is parsed as a session command. The session owns the
//! single [`CartStore`] for its lifetime; nothing is persisted.

use std::io::Write as _;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use anyhow::{bail, Context as _, Result};
use clap::{Parser, Subcommand};
use console::style;
use storefront_core::cart::{CartAction, CartStore, QuantitySelector, TaxRate};
use storefront_core::catalog::{CatalogSource, Loadable, Product, ViewScope};
use storefront_core::search::{load_visible_products, FilterSpec, SelectionMode};
use storefront_core::{Money, ProductId};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::context::Context;
use crate::views::cart::{badge, render_cart};
use crate::views::detail::{render_detail, render_not_found};
use crate::views::error_view;
use crate::views::listing::render_listing;

#[derive(Parser, Debug)]
#[command(name = "shop", no_binary_name = true, disable_version_flag = true)]
struct SessionLine {
    #[command(subcommand)]
    command: SessionCommand,
}

#[derive(Subcommand, Debug)]
enum SessionCommand {
    /// Show the listing with the current filters.
    #[command(alias = "ls")]
    List,
    /// Show a product's detail page.
    Show {
        id: String,
        #[arg(default_value_t = 1)]
        quantity: u32,
    },
    /// Add a product to the cart.
    Add {
        id: String,
        #[arg(default_value_t = 1)]
        quantity: u32,
    },
    /// Set a cart line's quantity; zero or less removes it.
    Qty {
        id: String,
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Increase a cart line by one.
    Inc { id: String },
    /// Decrease a cart line by one.
    Dec { id: String },
    /// Remove a product from the cart.
    #[command(alias = "rm")]
    Remove { id: String },
    /// Empty the cart.
    Clear,
    /// Show the cart and order summary.
    Cart,
    /// Toggle a category; with no name, select All.
    Category { name: Option<String> },
    /// Toggle a brand.
    Brand { name: String },
    /// Set the maximum price in dollars.
    Price {
        #[arg(allow_negative_numbers = true)]
        max: f64,
    },
    /// Set the search text; with no text, clear it.
    Search { text: Vec<String> },
    /// Clear every filter.
    Reset,
    /// End the session.
    #[command(alias = "exit")]
    Quit,
}

/// Result of one session command.
#[derive(Debug, Default, PartialEq)]
pub struct Step {
    /// Rendered view or message.
    pub output: String,
    /// Whether the session should end.
    pub quit: bool,
}

impl Step {
    fn show(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            quit: false,
        }
    }
}

/// State of one shopping session.
pub struct Session<S> {
    source: S,
    cart: CartStore,
    /// Ceiling restored by `reset`.
    default_ceiling: Money,
    filter: FilterSpec,
    category_mode: SelectionMode,
    tax_rate: TaxRate,
    cart_units: Arc<AtomicU64>,
    scope: ViewScope,
}

impl<S: CatalogSource> Session<S> {
    pub fn new(source: S, base_filter: FilterSpec, category_mode: SelectionMode, tax_rate: TaxRate) -> Self {
        let mut cart = CartStore::new();
        let cart_units = Arc::new(AtomicU64::new(0));
        let badge_units = Arc::clone(&cart_units);
        cart.subscribe(move |state| badge_units.store(state.item_count(), Ordering::Relaxed));

        Self {
            source,
            cart,
            default_ceiling: base_filter.price_ceiling,
            filter: base_filter,
            category_mode,
            tax_rate,
            cart_units,
            scope: ViewScope::new(),
        }
    }

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub fn filter(&self) -> &FilterSpec {
        &self.filter
    }

    /// Units in the cart, as kept current by the store subscription.
    pub fn cart_units(&self) -> u64 {
        self.cart_units.load(Ordering::Relaxed)
    }

    pub fn prompt(&self) -> String {
        format!("{} {} ", badge(self.cart_units()), style(">").bold())
    }

    /// Parse and run one input line.
    pub async fn execute(&mut self, line: &str) -> Step {
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() {
            return Step::default();
        }

        match SessionLine::try_parse_from(words) {
            Ok(parsed) => self.run(parsed.command).await,
            Err(e) => Step::show(e.render().to_string()),
        }
    }

    async fn run(&mut self, command: SessionCommand) -> Step {
        match command {
            SessionCommand::List => Step::show(self.listing().await),
            SessionCommand::Show { id, quantity } => Step::show(self.detail(id, quantity).await),
            SessionCommand::Add { id, quantity } => Step::show(self.add(id, quantity).await),
            SessionCommand::Qty { id, quantity } => Step::show(self.set_quantity(id, |_| quantity)),
            SessionCommand::Inc { id } => Step::show(self.set_quantity(id, |q| q + 1)),
            SessionCommand::Dec { id } => Step::show(self.set_quantity(id, |q| q - 1)),
            SessionCommand::Remove { id } => {
                let id = ProductId::new(id);
                if self.cart.state().get(&id).is_none() {
                    return Step::show(not_in_cart(&id));
                }
                self.cart.dispatch(CartAction::Remove(id));
                Step::show(self.cart_view())
            }
            SessionCommand::Clear => {
                self.cart.dispatch(CartAction::Clear);
                Step::show(self.cart_view())
            }
            SessionCommand::Cart => Step::show(self.cart_view()),
            SessionCommand::Category { name } => {
                match name {
                    Some(name) => self.filter.toggle_category(&name, self.category_mode),
                    None => self.filter.clear_categories(),
                }
                Step::show(self.listing().await)
            }
            SessionCommand::Brand { name } => {
                self.filter.toggle_brand(&name);
                Step::show(self.listing().await)
            }
            SessionCommand::Price { max } => {
                self.filter.price_ceiling = Money::from_dollars(max).non_negative();
                Step::show(self.listing().await)
            }
            SessionCommand::Search { text } => {
                self.filter.search = text.join(" ");
                Step::show(self.listing().await)
            }
            SessionCommand::Reset => {
                self.filter.clear();
                self.filter.price_ceiling = self.default_ceiling;
                Step::show(self.listing().await)
            }
            SessionCommand::Quit => {
                self.scope.close();
                Step {
                    output: "Thanks for shopping.".to_string(),
                    quit: true,
                }
            }
        }
    }

    async fn listing(&self) -> String {
        match self.scope.load(load_visible_products(&self.source, &self.filter)).await {
            Some(Loadable::Ready(products)) => render_listing(&products, &self.filter),
            Some(Loadable::Failed(message)) => error_view(&message),
            Some(Loadable::NotFound) | Some(Loadable::Pending) | None => String::new(),
        }
    }

    async fn fetch(&self, id: &ProductId) -> Option<Loadable<Product>> {
        self.scope.load(self.source.product(id)).await
    }

    async fn detail(&self, id: String, quantity: u32) -> String {
        let id = ProductId::new(id);
        match self.fetch(&id).await {
            Some(Loadable::Ready(product)) => {
                render_detail(&product, &QuantitySelector::starting_at(quantity))
            }
            Some(Loadable::NotFound) => render_not_found(&id),
            Some(Loadable::Failed(message)) => error_view(&message),
            Some(Loadable::Pending) | None => String::new(),
        }
    }

    async fn add(&mut self, id: String, quantity: u32) -> String {
        let id = ProductId::new(id);
        match self.fetch(&id).await {
            Some(Loadable::Ready(product)) => {
                if quantity == 0 {
                    return "Nothing to add.".to_string();
                }
                let before = self.line_quantity(&id);
                self.cart.add_many(&product, QuantitySelector::starting_at(quantity).get());
                let added = self.line_quantity(&id) - before;
                if added == 0 {
                    return format!(
                        "{} {} is already at the maximum quantity",
                        style("⚠").yellow(),
                        product.name
                    );
                }
                format!(
                    "{} Added {} x {} ({})",
                    style("✓").green(),
                    added,
                    product.name,
                    product.price.saturating_mul(added).display()
                )
            }
            Some(Loadable::NotFound) => render_not_found(&id),
            Some(Loadable::Failed(message)) => error_view(&message),
            Some(Loadable::Pending) | None => String::new(),
        }
    }

    fn line_quantity(&self, id: &ProductId) -> u32 {
        self.cart.state().get(id).map_or(0, |item| item.quantity)
    }

    fn set_quantity(&mut self, id: String, next: impl FnOnce(i64) -> i64) -> String {
        let id = ProductId::new(id);
        let Some(current) = self.cart.state().get(&id).map(|item| i64::from(item.quantity)) else {
            return not_in_cart(&id);
        };
        self.cart.dispatch(CartAction::UpdateQuantity {
            id,
            quantity: next(current),
        });
        self.cart_view()
    }

    fn cart_view(&self) -> String {
        render_cart(self.cart.state(), self.tax_rate)
    }
}

fn not_in_cart(id: &ProductId) -> String {
    format!("{} {} is not in your cart", style("⚠").yellow(), id)
}

/// Run the interactive session on stdin.
pub async fn run(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        bail!("shop is interactive and does not support --json");
    }

    let mut session = Session::new(
        ctx.catalog_source(),
        ctx.base_filter(),
        ctx.category_mode(),
        ctx.tax_rate(),
    );
    tracing::info!(category_mode = ctx.category_mode().as_str(), "shop session started");

    ctx.output.header("Storefront");
    ctx.output.info("Type `help` for commands, `quit` to leave.");
    ctx.output.block(&session.listing().await);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("\n{}", session.prompt());
        std::io::stdout().flush().context("Failed to flush stdout")?;

        let Some(line) = lines.next_line().await.context("Failed to read input")? else {
            break;
        };
        let step = session.execute(&line).await;
        if !step.output.is_empty() {
            ctx.output.block(&step.output);
        }
        if step.quit {
            break;
        }
    }

    tracing::info!(
        units = session.cart().state().item_count(),
        total = %session.cart().state().total(),
        filtered = !session.filter().is_unrestricted(),
        "shop session ended"
    );
    Ok(())
}
