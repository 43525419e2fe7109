//! Commerce error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur in commerce operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Item not in cart.
    #[error("Item not in cart: {0}")]
    ItemNotInCart(String),

    /// Invalid quantity (must be at least 1).
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Unit price below zero.
    #[error("Negative unit price: {0} cents")]
    NegativeUnitPrice(i64),

    /// Compare-at price lower than the current unit price.
    #[error("Compare-at price {compare_at_cents} cents is below unit price {unit_cents} cents")]
    CompareAtBelowUnitPrice {
        compare_at_cents: i64,
        unit_cents: i64,
    },

    /// Tax rate outside the `[0, 1]` fraction range.
    #[error("Tax rate {0} is outside [0, 1]")]
    InvalidTaxRate(Decimal),

    /// Free-shipping threshold below zero.
    #[error("Negative free-shipping threshold: {0} cents")]
    NegativeThreshold(i64),

    /// Quantity exceeds maximum allowed per line.
    #[error("Quantity {0} exceeds maximum allowed ({1})")]
    QuantityExceedsLimit(i64, i64),

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Invalid checkout state transition.
    #[error("Invalid checkout transition from {from} to {to}")]
    InvalidCheckoutTransition { from: String, to: String },

    /// Checkout incomplete.
    #[error("Checkout incomplete: missing {0}")]
    CheckoutIncomplete(String),
}

impl CommerceError {
    /// Whether this error is a line-item/input validation failure, as
    /// opposed to a state or arithmetic problem. Validation failures
    /// indicate malformed upstream data and are never retried.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CommerceError::InvalidQuantity(_)
                | CommerceError::NegativeUnitPrice(_)
                | CommerceError::CompareAtBelowUnitPrice { .. }
                | CommerceError::InvalidTaxRate(_)
                | CommerceError::NegativeThreshold(_)
        )
    }
}
