//! Bozor CLI - drives the storefront state from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog
//! bozor catalog list --limit 12
//! bozor catalog show 5
//! bozor catalog category beauty
//!
//! # Manage the cart
//! bozor cart add 5 --quantity 2
//! bozor cart list
//! bozor cart set-quantity 5 1
//! bozor cart remove 5
//! bozor cart clear
//!
//! # Manage the wishlist
//! bozor wishlist toggle 5
//! bozor wishlist list
//! bozor wishlist clear
//! ```
//!
//! The cart and wishlist persist under `BOZOR_DATA_DIR` (default `data`),
//! so state carries over between invocations.

#![cfg_attr(not(test), forbid(unsafe_code))]
// A CLI talks through stdout.
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};

use bozor_core::ProductId;
use bozor_storefront::{AppState, StorefrontConfig};

mod commands;

#[derive(Parser)]
#[command(name = "bozor")]
#[command(author, version, about = "Bozor storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the remote product catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Manage the persistent shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Manage the persistent wishlist
    Wishlist {
        #[command(subcommand)]
        action: WishlistAction,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List the first products of the catalog
    List {
        /// Number of products to list
        #[arg(short, long, default_value_t = 12)]
        limit: u32,
    },
    /// Show one product
    Show {
        /// Product id
        id: ProductId,
    },
    /// List all products in a category
    Category {
        /// Category slug (e.g. `beauty`)
        slug: String,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show cart entries and totals
    List,
    /// Fetch a product from the catalog and add it to the cart
    Add {
        /// Product id
        id: ProductId,

        /// Units to add (clamped to the product's stock)
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Set the quantity of a cart entry (0 removes it)
    SetQuantity {
        /// Product id
        id: ProductId,

        /// New quantity
        quantity: u32,
    },
    /// Remove a cart entry
    Remove {
        /// Product id
        id: ProductId,
    },
    /// Empty the cart
    Clear,
}

#[derive(Subcommand)]
enum WishlistAction {
    /// Show liked products
    List,
    /// Like a product, or unlike it if already liked
    Toggle {
        /// Product id
        id: ProductId,
    },
    /// Unlike a product
    Remove {
        /// Product id
        id: ProductId,
    },
    /// Empty the wishlist
    Clear,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;
    let state = AppState::new(config)?;

    match cli.command {
        Commands::Catalog { action } => match action {
            CatalogAction::List { limit } => commands::catalog::list(&state, limit).await?,
            CatalogAction::Show { id } => commands::catalog::show(&state, id).await?,
            CatalogAction::Category { slug } => commands::catalog::category(&state, &slug).await?,
        },
        Commands::Cart { action } => match action {
            CartAction::List => commands::cart::list(&state),
            CartAction::Add { id, quantity } => commands::cart::add(&state, id, quantity).await?,
            CartAction::SetQuantity { id, quantity } => {
                commands::cart::set_quantity(&state, id, quantity);
            }
            CartAction::Remove { id } => commands::cart::remove(&state, id),
            CartAction::Clear => commands::cart::clear(&state),
        },
        Commands::Wishlist { action } => match action {
            WishlistAction::List => commands::wishlist::list(&state),
            WishlistAction::Toggle { id } => commands::wishlist::toggle(&state, id).await?,
            WishlistAction::Remove { id } => commands::wishlist::remove(&state, id),
            WishlistAction::Clear => commands::wishlist::clear(&state),
        },
    }
    Ok(())
}
