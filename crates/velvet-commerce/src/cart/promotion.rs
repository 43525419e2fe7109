//! Promotion codes and the read-only promotion catalog.

use crate::ids::PromotionId;
use crate::money::Money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Normalize a customer-entered code for case-insensitive matching.
pub fn normalize_code(raw: &str) -> String {
    raw.trim().to_ascii_uppercase()
}

/// Value of a promotion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", content = "amount", rename_all = "snake_case")]
pub enum PromotionValue {
    /// Percentage off the subtotal (e.g., 20 for 20% off).
    Percentage(Decimal),
    /// Fixed amount off, capped at the subtotal.
    Fixed(Money),
}

impl PromotionValue {
    /// Calculate the discount for a subtotal (in major units, full
    /// precision). The result is clamped to `[0, subtotal]` so a discount
    /// never exceeds the amount it applies against.
    pub fn discount_for(&self, subtotal: Decimal) -> Decimal {
        let raw = match self {
            PromotionValue::Percentage(percent) => subtotal * *percent / Decimal::ONE_HUNDRED,
            PromotionValue::Fixed(amount) => amount.to_decimal(),
        };
        raw.clamp(Decimal::ZERO, subtotal)
    }

    /// Name of the promotion kind.
    pub fn kind(&self) -> &'static str {
        match self {
            PromotionValue::Percentage(_) => "percentage",
            PromotionValue::Fixed(_) => "fixed",
        }
    }
}

/// A promotion code definition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Promotion {
    /// Unique promotion identifier.
    pub id: PromotionId,
    /// Canonical (uppercase) code, e.g. "WELCOME10".
    pub code: String,
    /// Description for display ("10% off your first order").
    pub description: Option<String>,
    /// Value of the promotion.
    pub value: PromotionValue,
    /// Minimum subtotal required for the code to apply.
    pub minimum_subtotal: Option<Money>,
    /// Whether the promotion is active.
    pub active: bool,
}

impl Promotion {
    /// Create a percentage promotion.
    pub fn percentage(code: impl Into<String>, percent: Decimal) -> Self {
        Self {
            id: PromotionId::generate(),
            code: normalize_code(&code.into()),
            description: None,
            value: PromotionValue::Percentage(percent),
            minimum_subtotal: None,
            active: true,
        }
    }

    /// Create a fixed-amount promotion.
    pub fn fixed(code: impl Into<String>, amount: Money) -> Self {
        Self {
            id: PromotionId::generate(),
            code: normalize_code(&code.into()),
            description: None,
            value: PromotionValue::Fixed(amount),
            minimum_subtotal: None,
            active: true,
        }
    }

    /// Require a minimum subtotal (builder style).
    pub fn with_minimum_subtotal(mut self, minimum: Money) -> Self {
        self.minimum_subtotal = Some(minimum);
        self
    }

    /// Set the description (builder style).
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Check whether this promotion applies at the given subtotal.
    /// The catalog and the cart share one currency, so the minimum is
    /// compared in cents.
    pub fn is_eligible(&self, subtotal: Money) -> bool {
        if !self.active {
            return false;
        }
        self.minimum_subtotal
            .map(|min| subtotal.amount_cents >= min.amount_cents)
            .unwrap_or(true)
    }
}

/// Read-only lookup table of valid promotion codes, keyed by normalized
/// code. Supplied by the caller at pricing time; the pricing engine never
/// mutates it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PromotionCatalog {
    codes: HashMap<String, Promotion>,
}

impl PromotionCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a promotion, replacing any existing entry with the same code.
    pub fn insert(&mut self, promotion: Promotion) {
        self.codes
            .insert(normalize_code(&promotion.code), promotion);
    }

    /// Look up a promotion by customer-entered code (case-insensitive).
    pub fn lookup(&self, raw_code: &str) -> Option<&Promotion> {
        self.codes.get(&normalize_code(raw_code))
    }

    /// Iterate over all promotions.
    pub fn iter(&self) -> impl Iterator<Item = &Promotion> {
        self.codes.values()
    }

    /// Number of promotions in the catalog.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl FromIterator<Promotion> for PromotionCatalog {
    fn from_iter<I: IntoIterator<Item = Promotion>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for promotion in iter {
            catalog.insert(promotion);
        }
        catalog
    }
}
