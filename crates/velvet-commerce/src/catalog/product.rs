//! Product types.

use crate::error::CommerceError;
use crate::ids::{CategoryId, ProductId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Stock keeping unit (unique).
    pub sku: String,
    /// Product name.
    pub name: String,
    /// URL-friendly slug (unique).
    pub slug: String,
    /// Full description.
    pub description: Option<String>,
    /// Current unit price.
    pub price: Money,
    /// Compare-at price (original list price for showing markdowns).
    /// Must be at least the current price when present.
    pub compare_at_price: Option<Money>,
    /// Category this product belongs to.
    pub category_id: Option<CategoryId>,
    /// Image URLs, first is the primary image.
    pub images: Vec<String>,
    /// Tags for filtering/search.
    pub tags: Vec<String>,
    /// Featured on the landing page.
    pub featured: bool,
    /// Whether the product can currently be purchased.
    pub in_stock: bool,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
}

impl Product {
    /// Create a new product.
    pub fn new(
        sku: impl Into<String>,
        name: impl Into<String>,
        slug: impl Into<String>,
        price: Money,
    ) -> Self {
        let now = current_timestamp();
        Self {
            id: ProductId::generate(),
            sku: sku.into(),
            name: name.into(),
            slug: slug.into(),
            description: None,
            price,
            compare_at_price: None,
            category_id: None,
            images: Vec::new(),
            tags: Vec::new(),
            featured: false,
            in_stock: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the compare-at price (builder style).
    pub fn with_compare_at_price(mut self, compare_at: Money) -> Self {
        self.compare_at_price = Some(compare_at);
        self
    }

    /// Check the price pair invariant: a compare-at price, when present,
    /// is never below the current price.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.price.is_negative() {
            return Err(CommerceError::NegativeUnitPrice(self.price.amount_cents));
        }
        if let Some(compare_at) = &self.compare_at_price {
            if compare_at.amount_cents < self.price.amount_cents {
                return Err(CommerceError::CompareAtBelowUnitPrice {
                    compare_at_cents: compare_at.amount_cents,
                    unit_cents: self.price.amount_cents,
                });
            }
        }
        Ok(())
    }

    /// Check if the product is marked down from its list price.
    pub fn is_on_sale(&self) -> bool {
        self.compare_at_price
            .map(|c| c.amount_cents > self.price.amount_cents)
            .unwrap_or(false)
    }

    /// Savings per unit against the compare-at price, floored at zero.
    pub fn savings_per_unit(&self) -> Money {
        let cents = self
            .compare_at_price
            .map(|c| (c.amount_cents - self.price.amount_cents).max(0))
            .unwrap_or(0);
        Money::new(cents, self.price.currency)
    }

    /// Check if the product is available for purchase.
    pub fn is_available(&self) -> bool {
        self.in_stock
    }

    /// Add a tag to this product.
    pub fn add_tag(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_product_creation() {
        let product = Product::new(
            "VLV-001",
            "Velvet Blazer",
            "velvet-blazer",
            Money::new(12900, Currency::USD),
        );
        assert!(product.is_available());
        assert!(!product.is_on_sale());
        assert!(product.validate().is_ok());
    }

    #[test]
    fn test_on_sale_and_savings() {
        let product = Product::new(
            "VLV-002",
            "Silk Scarf",
            "silk-scarf",
            Money::new(3900, Currency::USD),
        )
        .with_compare_at_price(Money::new(5900, Currency::USD));

        assert!(product.is_on_sale());
        assert_eq!(product.savings_per_unit().amount_cents, 2000);
        assert!(product.validate().is_ok());
    }

    #[test]
    fn test_inverted_price_pair_rejected() {
        let product = Product::new(
            "VLV-003",
            "Wool Coat",
            "wool-coat",
            Money::new(19900, Currency::USD),
        )
        .with_compare_at_price(Money::new(9900, Currency::USD));

        assert!(matches!(
            product.validate(),
            Err(CommerceError::CompareAtBelowUnitPrice { .. })
        ));
    }
}
