//! Cart pricing command.

use anyhow::Result;
use velvet_commerce::cart::{price_cart, PriceBreakdown, PricingConfig};
use velvet_store::Storefront;

use super::{build_cart, resolve_shipping, PriceArgs};
use crate::output::Output;

/// Run the price command.
pub fn run(args: PriceArgs, store: &Storefront, output: &Output) -> Result<()> {
    let cart = build_cart(store, &args.items)?;
    let shipping = resolve_shipping(store, &args.shipping)?;

    let config = match args.tax_rate {
        Some(rate) => PricingConfig::new(rate, PricingConfig::default().free_shipping_threshold)?,
        None => PricingConfig::default(),
    };

    let breakdown = price_cart(
        &cart.items,
        args.code.as_deref(),
        &store.promotions,
        shipping,
        &config,
    )?;

    if output.is_json() {
        output.json(&breakdown);
        return Ok(());
    }

    output.header("Cart");
    for item in &cart.items {
        output.list_item(&format!(
            "{} x{}  {}",
            item.product_name,
            item.quantity,
            item.line_subtotal()?
        ));
    }

    print_breakdown(&breakdown, output);

    if args.code.is_some() && breakdown.applied_code.is_none() {
        output.warn("Promotion code did not apply");
    }

    Ok(())
}

/// Print a price breakdown as key-value lines.
pub fn print_breakdown(breakdown: &PriceBreakdown, output: &Output) {
    output.header("Price breakdown");
    output.kv("subtotal", &breakdown.subtotal.display());
    if breakdown.item_savings.is_positive() {
        output.kv("item savings", &breakdown.item_savings.display());
    }
    match &breakdown.applied_code {
        Some(code) => output.kv(
            "discount",
            &format!("-{} ({})", breakdown.discount.display(), code),
        ),
        None => output.kv("discount", &breakdown.discount.display()),
    }
    if breakdown.shipping.is_zero() {
        output.kv("shipping", "free");
    } else {
        output.kv("shipping", &breakdown.shipping.display());
    }
    output.kv("tax", &breakdown.tax.display());
    output.kv("total", &breakdown.total.display());
}
