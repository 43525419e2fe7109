//! Order types. An order is an immutable snapshot of a priced cart.

use crate::cart::{Cart, PriceBreakdown};
use crate::checkout::{Address, ShippingOption};
use crate::error::CommerceError;
use crate::ids::{OrderId, OrderLineItemId, ProductId, UserId};
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Order status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Order placed, awaiting processing.
    #[default]
    Pending,
    /// Order being prepared.
    Processing,
    /// Order shipped.
    Shipped,
    /// Order delivered.
    Delivered,
    /// Order cancelled.
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Check if order is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// Check if order can still be cancelled.
    pub fn can_cancel(&self) -> bool {
        matches!(self, OrderStatus::Pending | OrderStatus::Processing)
    }
}

/// Financial/payment status. The payment provider is mocked, so orders
/// are created already paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FinancialStatus {
    /// Payment pending.
    #[default]
    Pending,
    /// Payment captured.
    Paid,
    /// Payment refunded.
    Refunded,
}

impl FinancialStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FinancialStatus::Pending => "pending",
            FinancialStatus::Paid => "paid",
            FinancialStatus::Refunded => "refunded",
        }
    }
}

/// A placed order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Unique order identifier.
    pub id: OrderId,
    /// Human-readable order number.
    pub order_number: String,
    /// Customer user ID (None for guest checkout).
    pub user_id: Option<UserId>,
    /// Customer email.
    pub email: String,
    /// Order status.
    pub status: OrderStatus,
    /// Payment status.
    pub financial_status: FinancialStatus,
    /// Items in the order, frozen at placement time.
    pub line_items: Vec<OrderLineItem>,
    /// Shipping address.
    pub shipping_address: Address,
    /// Shipping option used, frozen at placement time.
    pub shipping_option: ShippingOption,
    /// Subtotal before discounts.
    pub subtotal: Money,
    /// Savings against compare-at prices.
    pub item_savings: Money,
    /// Promotion discount.
    pub discount: Money,
    /// Shipping charged (after any free-shipping override).
    pub shipping_total: Money,
    /// Tax charged.
    pub tax_total: Money,
    /// Grand total charged.
    pub grand_total: Money,
    /// Canonical code of the applied promotion, if any.
    pub applied_code: Option<String>,
    /// Order currency.
    pub currency: Currency,
    /// Customer note.
    pub note: Option<String>,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
    /// Unix timestamp when cancelled (if applicable).
    pub cancelled_at: Option<i64>,
}

impl Order {
    /// Place an order from a cart and its price breakdown. Line items
    /// are snapshotted; the mocked payment succeeds immediately, so the
    /// order is created `Paid`.
    pub fn place(
        cart: &Cart,
        breakdown: &PriceBreakdown,
        email: impl Into<String>,
        shipping_address: Address,
        shipping_option: ShippingOption,
    ) -> Result<Self, CommerceError> {
        let line_items = cart
            .items
            .iter()
            .map(|item| {
                Ok(OrderLineItem {
                    id: OrderLineItemId::generate(),
                    product_id: item.product_id.clone(),
                    name: item.product_name.clone(),
                    quantity: item.quantity,
                    unit_price: item.unit_price,
                    compare_at_unit_price: item.compare_at_unit_price,
                    line_total: item.line_subtotal()?,
                })
            })
            .collect::<Result<Vec<_>, CommerceError>>()?;

        let now = current_timestamp();
        Ok(Self {
            id: OrderId::generate(),
            order_number: Self::generate_order_number(),
            user_id: cart.user_id.clone(),
            email: email.into(),
            status: OrderStatus::Pending,
            financial_status: FinancialStatus::Paid,
            line_items,
            shipping_address,
            shipping_option,
            subtotal: breakdown.subtotal,
            item_savings: breakdown.item_savings,
            discount: breakdown.discount,
            shipping_total: breakdown.shipping,
            tax_total: breakdown.tax,
            grand_total: breakdown.total,
            applied_code: breakdown.applied_code.clone(),
            currency: cart.currency,
            note: cart.note.clone(),
            created_at: now,
            updated_at: now,
            cancelled_at: None,
        })
    }

    /// Generate a new order number.
    pub fn generate_order_number() -> String {
        use std::time::{SystemTime, UNIX_EPOCH};
        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        format!("VLV-{}", ts)
    }

    /// Get total item count.
    pub fn item_count(&self) -> i64 {
        self.line_items.iter().map(|i| i.quantity).sum()
    }

    /// Check if order is paid.
    pub fn is_paid(&self) -> bool {
        self.financial_status == FinancialStatus::Paid
    }

    /// Cancel the order. Returns false if the status no longer allows it.
    pub fn cancel(&mut self) -> bool {
        if !self.status.can_cancel() {
            return false;
        }
        self.status = OrderStatus::Cancelled;
        self.cancelled_at = Some(current_timestamp());
        self.updated_at = current_timestamp();
        true
    }

    /// Update order status.
    pub fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
        self.updated_at = current_timestamp();
    }
}

/// A line item in an order, frozen at placement time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLineItem {
    /// Unique line item identifier.
    pub id: OrderLineItemId,
    /// Product ID.
    pub product_id: ProductId,
    /// Product name at time of order.
    pub name: String,
    /// Quantity ordered.
    pub quantity: i64,
    /// Unit price at time of order.
    pub unit_price: Money,
    /// Compare-at unit price at time of order.
    pub compare_at_unit_price: Option<Money>,
    /// Total price for this line.
    pub line_total: Money,
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
