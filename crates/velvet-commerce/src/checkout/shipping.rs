//! Shipping option types.

use crate::ids::ShippingOptionId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Shipping service tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShippingTier {
    /// Ground shipping, eligible for the free-shipping threshold.
    Standard,
    /// Expedited shipping.
    Express,
    /// Next-day shipping.
    Overnight,
}

impl ShippingTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShippingTier::Standard => "standard",
            ShippingTier::Express => "express",
            ShippingTier::Overnight => "overnight",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "standard" => Some(ShippingTier::Standard),
            "express" => Some(ShippingTier::Express),
            "overnight" => Some(ShippingTier::Overnight),
            _ => None,
        }
    }
}

/// A shipping option the customer can select.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShippingOption {
    /// Unique identifier.
    pub id: ShippingOptionId,
    /// Service tier.
    pub tier: ShippingTier,
    /// Display name.
    pub name: String,
    /// Nominal shipping price before any free-shipping override.
    pub price: Money,
    /// Minimum delivery days.
    pub min_delivery_days: Option<i32>,
    /// Maximum delivery days.
    pub max_delivery_days: Option<i32>,
}

impl ShippingOption {
    /// Create a new shipping option.
    pub fn new(tier: ShippingTier, name: impl Into<String>, price: Money) -> Self {
        Self {
            id: ShippingOptionId::generate(),
            tier,
            name: name.into(),
            price,
            min_delivery_days: None,
            max_delivery_days: None,
        }
    }

    /// Set the delivery window (builder style).
    pub fn with_delivery_days(mut self, min: i32, max: i32) -> Self {
        self.min_delivery_days = Some(min);
        self.max_delivery_days = Some(max);
        self
    }

    /// Get delivery estimate string.
    pub fn delivery_estimate(&self) -> Option<String> {
        match (self.min_delivery_days, self.max_delivery_days) {
            (Some(min), Some(max)) if min == max => Some(format!("{} days", min)),
            (Some(min), Some(max)) => Some(format!("{}-{} days", min, max)),
            (Some(min), None) => Some(format!("{}+ days", min)),
            (None, Some(max)) => Some(format!("Up to {} days", max)),
            (None, None) => None,
        }
    }

    /// Whether this option's price is waived once the cart subtotal
    /// reaches the free-shipping threshold. Only the standard tier
    /// qualifies.
    pub fn qualifies_for_free_threshold(&self) -> bool {
        self.tier == ShippingTier::Standard
    }

    /// Check if the nominal price is free.
    pub fn is_free(&self) -> bool {
        self.price.is_zero()
    }
}
