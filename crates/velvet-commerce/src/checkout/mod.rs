//! Checkout: shipping options, addresses, the step flow, and orders.

mod address;
mod flow;
mod order;
mod shipping;

pub use address::Address;
pub use flow::{CheckoutFlow, CheckoutStep};
pub use order::{FinancialStatus, Order, OrderLineItem, OrderStatus};
pub use shipping::{ShippingOption, ShippingTier};
