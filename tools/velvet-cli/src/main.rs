//! Velvet CLI - storefront demo against the seeded in-memory catalog.
//!
//! Commands:
//! - `velvet catalog` - Browse the product catalog
//! - `velvet promotions` - List promotion codes
//! - `velvet price` - Price a cart with optional promotion and shipping
//! - `velvet checkout` - Walk the checkout flow and place an order

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use velvet_store::Storefront;

use commands::{CatalogArgs, CheckoutArgs, PriceArgs, PromotionsArgs};

/// Velvet CLI - Browse, price, and check out against the demo storefront
#[derive(Parser)]
#[command(name = "velvet")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the product catalog
    Catalog(CatalogArgs),

    /// List promotion codes
    Promotions(PromotionsArgs),

    /// Price a cart
    Price(PriceArgs),

    /// Walk the checkout flow and place an order
    Checkout(CheckoutArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = output::Output::new(cli.verbose, cli.json);

    let mut store = match Storefront::seeded() {
        Ok(store) => store,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Catalog(args) => commands::catalog::run(args, &store, &output),
        Commands::Promotions(args) => commands::promotions::run(args, &store, &output),
        Commands::Price(args) => commands::price::run(args, &store, &output),
        Commands::Checkout(args) => commands::checkout::run(args, &mut store, &output),
    };

    if let Err(e) = result {
        output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
