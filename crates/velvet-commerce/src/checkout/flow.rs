//! Checkout flow state machine.

use crate::checkout::{Address, ShippingOption};
use crate::error::CommerceError;
use crate::ids::{CartId, CheckoutId};
use serde::{Deserialize, Serialize};

/// Steps in the checkout flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheckoutStep {
    /// Cart review.
    Cart,
    /// Contact information.
    Information,
    /// Shipping address and option.
    Shipping,
    /// Payment. Payments are mocked and always succeed.
    Payment,
    /// Order placed.
    Confirmation,
}

impl CheckoutStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutStep::Cart => "cart",
            CheckoutStep::Information => "information",
            CheckoutStep::Shipping => "shipping",
            CheckoutStep::Payment => "payment",
            CheckoutStep::Confirmation => "confirmation",
        }
    }

    /// Get the step number (1-indexed).
    pub fn number(&self) -> u8 {
        match self {
            CheckoutStep::Cart => 1,
            CheckoutStep::Information => 2,
            CheckoutStep::Shipping => 3,
            CheckoutStep::Payment => 4,
            CheckoutStep::Confirmation => 5,
        }
    }
}

/// Checkout flow state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutFlow {
    /// Unique checkout identifier.
    pub id: CheckoutId,
    /// Associated cart ID.
    pub cart_id: CartId,
    /// Current step.
    pub step: CheckoutStep,
    /// Customer email.
    pub email: Option<String>,
    /// Shipping address.
    pub shipping_address: Option<Address>,
    /// Selected shipping option.
    pub shipping_option: Option<ShippingOption>,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
}

impl CheckoutFlow {
    /// Create a new checkout flow starting at the cart step.
    pub fn new(cart_id: CartId) -> Self {
        let now = current_timestamp();
        Self {
            id: CheckoutId::generate(),
            cart_id,
            step: CheckoutStep::Cart,
            email: None,
            shipping_address: None,
            shipping_option: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if the flow can advance to a step.
    pub fn can_advance_to(&self, step: CheckoutStep) -> bool {
        match step {
            CheckoutStep::Cart | CheckoutStep::Information => true,
            CheckoutStep::Shipping => self.email.is_some(),
            CheckoutStep::Payment => {
                self.email.is_some()
                    && self
                        .shipping_address
                        .as_ref()
                        .map(|a| a.is_complete())
                        .unwrap_or(false)
                    && self.shipping_option.is_some()
            }
            // Payment always succeeds (mocked), so reaching Payment is
            // enough to confirm.
            CheckoutStep::Confirmation => self.can_advance_to(CheckoutStep::Payment),
        }
    }

    /// Advance to the next step.
    pub fn advance(&mut self) -> Result<CheckoutStep, CommerceError> {
        let next = match self.step {
            CheckoutStep::Cart => CheckoutStep::Information,
            CheckoutStep::Information => CheckoutStep::Shipping,
            CheckoutStep::Shipping => CheckoutStep::Payment,
            CheckoutStep::Payment => CheckoutStep::Confirmation,
            CheckoutStep::Confirmation => {
                return Err(CommerceError::InvalidCheckoutTransition {
                    from: "confirmation".to_string(),
                    to: "none".to_string(),
                })
            }
        };

        if !self.can_advance_to(next) {
            return Err(CommerceError::CheckoutIncomplete(
                self.missing_for_step(next).join(", "),
            ));
        }

        self.step = next;
        self.updated_at = current_timestamp();
        Ok(next)
    }

    /// Go back to the previous step. Not allowed from Cart or once the
    /// order is confirmed.
    pub fn go_back(&mut self) -> Result<CheckoutStep, CommerceError> {
        let prev = match self.step {
            CheckoutStep::Cart | CheckoutStep::Confirmation => {
                return Err(CommerceError::InvalidCheckoutTransition {
                    from: self.step.as_str().to_string(),
                    to: "back".to_string(),
                })
            }
            CheckoutStep::Information => CheckoutStep::Cart,
            CheckoutStep::Shipping => CheckoutStep::Information,
            CheckoutStep::Payment => CheckoutStep::Shipping,
        };

        self.step = prev;
        self.updated_at = current_timestamp();
        Ok(prev)
    }

    /// Get what's missing to advance to a step.
    fn missing_for_step(&self, step: CheckoutStep) -> Vec<&'static str> {
        let mut missing = Vec::new();
        match step {
            CheckoutStep::Shipping => {
                if self.email.is_none() {
                    missing.push("email");
                }
            }
            CheckoutStep::Payment | CheckoutStep::Confirmation => {
                if self.email.is_none() {
                    missing.push("email");
                }
                if !self
                    .shipping_address
                    .as_ref()
                    .map(|a| a.is_complete())
                    .unwrap_or(false)
                {
                    missing.push("shipping address");
                }
                if self.shipping_option.is_none() {
                    missing.push("shipping option");
                }
            }
            _ => {}
        }
        missing
    }

    /// Set the customer email.
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = Some(email.into());
        self.updated_at = current_timestamp();
    }

    /// Set the shipping address.
    pub fn set_shipping_address(&mut self, address: Address) {
        self.shipping_address = Some(address);
        self.updated_at = current_timestamp();
    }

    /// Set the shipping option.
    pub fn set_shipping_option(&mut self, option: ShippingOption) {
        self.shipping_option = Some(option);
        self.updated_at = current_timestamp();
    }

    /// Check if the order has been placed.
    pub fn is_complete(&self) -> bool {
        self.step == CheckoutStep::Confirmation
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
