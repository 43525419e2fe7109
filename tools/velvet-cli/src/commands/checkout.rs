//! Checkout command: walks the flow end to end and places an order.

use anyhow::Result;
use velvet_commerce::cart::{price_cart, PricingConfig};
use velvet_commerce::checkout::{Address, CheckoutFlow, Order};
use velvet_store::Storefront;

use super::{build_cart, resolve_shipping, CheckoutArgs};
use crate::output::Output;
use crate::commands::price::print_breakdown;

/// Run the checkout command.
pub fn run(args: CheckoutArgs, store: &mut Storefront, output: &Output) -> Result<()> {
    let cart = build_cart(store, &args.items)?;
    let shipping = resolve_shipping(store, &args.shipping)?.clone();

    let address = Address {
        first_name: args.first_name.clone(),
        last_name: args.last_name.clone(),
        line1: args.line1.clone(),
        line2: None,
        city: args.city.clone(),
        region: String::new(),
        postal_code: args.postal_code.clone(),
        country: args.country.clone(),
    };

    // Walk the flow: cart -> information -> shipping -> payment -> confirmation.
    let mut flow = CheckoutFlow::new(cart.id.clone());
    output.step(flow.step.number() as usize, 5, "Reviewing cart");
    flow.advance()?;

    output.step(flow.step.number() as usize, 5, "Collecting contact information");
    flow.set_email(&args.email);
    flow.advance()?;

    output.step(flow.step.number() as usize, 5, "Selecting shipping");
    flow.set_shipping_address(address.clone());
    flow.set_shipping_option(shipping.clone());
    flow.advance()?;

    output.step(flow.step.number() as usize, 5, "Processing payment");
    let breakdown = price_cart(
        &cart.items,
        args.code.as_deref(),
        &store.promotions,
        &shipping,
        &PricingConfig::default(),
    )?;
    flow.advance()?;

    let order = Order::place(&cart, &breakdown, &args.email, address, shipping)?;
    output.step(flow.step.number() as usize, 5, "Order confirmed");

    let order_number = order.order_number.clone();
    if output.is_json() {
        output.json(&order);
    } else {
        print_breakdown(&breakdown, output);
        output.success(&format!(
            "Order {} placed for {} ({})",
            order_number,
            args.email,
            order.grand_total
        ));
    }

    store.carts.upsert(cart);
    store.orders.upsert(order);
    output.debug(&format!("Stored order {}", order_number));

    Ok(())
}
