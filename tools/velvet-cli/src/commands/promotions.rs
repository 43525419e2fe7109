//! Promotion listing command.

use anyhow::Result;
use velvet_commerce::cart::{Promotion, PromotionValue};
use velvet_store::Storefront;

use super::PromotionsArgs;
use crate::output::Output;

/// Run the promotions command.
pub fn run(args: PromotionsArgs, store: &Storefront, output: &Output) -> Result<()> {
    let mut promotions: Vec<&Promotion> = store
        .promotions
        .iter()
        .filter(|p| args.all || p.active)
        .collect();
    promotions.sort_by(|a, b| a.code.cmp(&b.code));

    if output.is_json() {
        output.json(&promotions);
        return Ok(());
    }

    output.header("Promotion codes");

    for promotion in &promotions {
        let value = match &promotion.value {
            PromotionValue::Percentage(percent) => format!("{}% off", percent),
            PromotionValue::Fixed(amount) => format!("{} off", amount),
        };
        let mut line = format!("{}  {}", promotion.code, value);
        if let Some(minimum) = promotion.minimum_subtotal {
            line.push_str(&format!(" (min {})", minimum));
        }
        if !promotion.active {
            line.push_str(" [inactive]");
        }
        output.list_item(&line);
        if let Some(description) = &promotion.description {
            output.debug(description);
        }
    }

    output.info(&format!("{} promotions", promotions.len()));
    Ok(())
}
