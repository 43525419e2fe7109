//! Shopping cart: line items, promotions, and pricing.

#[allow(clippy::module_inception)]
mod cart;
mod pricing;
mod promotion;

pub use cart::{Cart, LineItem, MAX_QUANTITY_PER_ITEM};
pub use pricing::{price_cart, PriceBreakdown, PricingConfig};
pub use promotion::{normalize_code, Promotion, PromotionCatalog, PromotionValue};
