//! CLI command implementations.

pub mod catalog;
pub mod checkout;
pub mod price;
pub mod promotions;

use anyhow::{anyhow, bail, Result};
use clap::{Args, Subcommand};
use rust_decimal::Decimal;
use velvet_commerce::cart::Cart;
use velvet_commerce::checkout::{ShippingOption, ShippingTier};
use velvet_store::Storefront;

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: Option<CatalogCommand>,

    /// Show only featured products.
    #[arg(short, long)]
    pub featured: bool,
}

#[derive(Subcommand)]
pub enum CatalogCommand {
    /// List all products.
    List,
    /// List categories.
    Categories,
    /// Show details for one product.
    Show {
        /// Product SKU or slug.
        product: String,
    },
}

/// Arguments for the promotions command.
#[derive(Args)]
pub struct PromotionsArgs {
    /// Include inactive promotions.
    #[arg(long)]
    pub all: bool,
}

/// Arguments for the price command.
#[derive(Args)]
pub struct PriceArgs {
    /// Cart line in SKU=QTY form (repeatable), e.g. `--item VLV-001=2`.
    #[arg(short, long = "item", value_name = "SKU=QTY", required = true)]
    pub items: Vec<String>,

    /// Promotion code to apply.
    #[arg(short, long)]
    pub code: Option<String>,

    /// Shipping tier: standard, express, or overnight.
    #[arg(short, long, default_value = "standard")]
    pub shipping: String,

    /// Override the tax rate (e.g. 0.08).
    #[arg(long)]
    pub tax_rate: Option<Decimal>,
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Cart line in SKU=QTY form (repeatable).
    #[arg(short, long = "item", value_name = "SKU=QTY", required = true)]
    pub items: Vec<String>,

    /// Promotion code to apply.
    #[arg(short, long)]
    pub code: Option<String>,

    /// Shipping tier: standard, express, or overnight.
    #[arg(short, long, default_value = "standard")]
    pub shipping: String,

    /// Customer email.
    #[arg(long)]
    pub email: String,

    /// Recipient first name.
    #[arg(long, default_value = "Demo")]
    pub first_name: String,

    /// Recipient last name.
    #[arg(long, default_value = "Customer")]
    pub last_name: String,

    /// Street address.
    #[arg(long, default_value = "1 Demo Street")]
    pub line1: String,

    /// City.
    #[arg(long, default_value = "Springfield")]
    pub city: String,

    /// Postal code.
    #[arg(long, default_value = "00000")]
    pub postal_code: String,

    /// ISO country code.
    #[arg(long, default_value = "US")]
    pub country: String,
}

/// Build a cart from repeated `SKU=QTY` arguments against the catalog.
pub fn build_cart(store: &Storefront, items: &[String]) -> Result<Cart> {
    let mut cart = Cart::new("cli-session");

    for spec in items {
        let (sku, qty) = parse_item_spec(spec)?;
        let product = store
            .product_by_sku(sku)
            .ok_or_else(|| anyhow!("Product not found: {}", sku))?;
        cart.add_product(product, qty)?;
    }

    Ok(cart)
}

/// Parse a `SKU=QTY` cart line argument.
fn parse_item_spec(spec: &str) -> Result<(&str, i64)> {
    let Some((sku, qty)) = spec.split_once('=') else {
        bail!("Invalid item '{}': expected SKU=QTY", spec);
    };
    let qty: i64 = qty
        .parse()
        .map_err(|_| anyhow!("Invalid quantity in '{}': expected an integer", spec))?;
    Ok((sku, qty))
}

/// Resolve a shipping tier argument to a seeded shipping option.
pub fn resolve_shipping<'a>(store: &'a Storefront, tier: &str) -> Result<&'a ShippingOption> {
    let tier = ShippingTier::from_str(tier)
        .ok_or_else(|| anyhow!("Unknown shipping tier: {} (expected standard, express, or overnight)", tier))?;
    store
        .shipping_option_for_tier(tier)
        .ok_or_else(|| anyhow!("No shipping option configured for tier: {}", tier.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_item_spec() {
        assert_eq!(parse_item_spec("VLV-001=2").unwrap(), ("VLV-001", 2));
        assert!(parse_item_spec("VLV-001").is_err());
        assert!(parse_item_spec("VLV-001=two").is_err());
    }

    #[test]
    fn test_build_cart_from_specs() {
        let store = Storefront::seeded().unwrap();
        let cart = build_cart(
            &store,
            &["VLV-001=1".to_string(), "VLV-002=3".to_string()],
        )
        .unwrap();
        assert_eq!(cart.items.len(), 2);
        assert_eq!(cart.item_count(), 4);

        assert!(build_cart(&store, &["VLV-999=1".to_string()]).is_err());
    }

    #[test]
    fn test_resolve_shipping() {
        let store = Storefront::seeded().unwrap();
        assert!(resolve_shipping(&store, "express").is_ok());
        assert!(resolve_shipping(&store, "teleport").is_err());
    }
}
