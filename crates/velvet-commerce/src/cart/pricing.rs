//! Cart pricing: one pure function turns a cart, an optional promotion
//! code, and a shipping selection into a complete price breakdown.
//!
//! All monetary intermediates use [`Decimal`] at full precision; each
//! output field is rounded half-up to whole cents exactly once, at the
//! output boundary. The computation holds no state, performs no I/O, and
//! never mutates its inputs, so identical inputs always produce identical
//! breakdowns.

use crate::cart::{LineItem, PromotionCatalog};
use crate::checkout::ShippingOption;
use crate::error::CommerceError;
use crate::money::Money;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Pricing parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricingConfig {
    /// Tax rate as a fraction in `[0, 1]` applied to the post-discount
    /// subtotal.
    pub tax_rate: Decimal,
    /// Subtotal at which standard shipping becomes free.
    pub free_shipping_threshold: Money,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            tax_rate: dec!(0.08),
            free_shipping_threshold: Money::new(100_00, Default::default()),
        }
    }
}

impl PricingConfig {
    /// Create a config, rejecting out-of-range parameters.
    pub fn new(tax_rate: Decimal, free_shipping_threshold: Money) -> Result<Self, CommerceError> {
        let config = Self {
            tax_rate,
            free_shipping_threshold,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the config invariants: tax rate in `[0, 1]`, non-negative
    /// threshold.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.tax_rate < Decimal::ZERO || self.tax_rate > Decimal::ONE {
            return Err(CommerceError::InvalidTaxRate(self.tax_rate));
        }
        if self.free_shipping_threshold.is_negative() {
            return Err(CommerceError::NegativeThreshold(
                self.free_shipping_threshold.amount_cents,
            ));
        }
        Ok(())
    }
}

/// Complete pricing breakdown for a cart. A fresh value computed per
/// request; never mutated after construction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriceBreakdown {
    /// Sum of unit price x quantity over all lines.
    pub subtotal: Money,
    /// Savings against compare-at prices across all lines.
    pub item_savings: Money,
    /// Promotion discount. Zero when no code applied.
    pub discount: Money,
    /// Shipping cost after the free-shipping override.
    pub shipping: Money,
    /// Tax on the post-discount subtotal.
    pub tax: Money,
    /// Grand total: `max(0, subtotal - discount + shipping + tax)`.
    pub total: Money,
    /// Canonical code of the applied promotion, `None` when no code was
    /// given, the code was unknown, or its minimum subtotal was unmet.
    pub applied_code: Option<String>,
}

impl PriceBreakdown {
    /// Check if a promotion discount was applied.
    pub fn has_discount(&self) -> bool {
        self.discount.is_positive()
    }
}

/// Price a cart.
///
/// Line items are validated first: a negative unit price, a quantity
/// below one, or a compare-at price below the unit price fails with the
/// corresponding validation error. Everything else degrades gracefully:
/// an unknown code or an unmet minimum yields `discount = 0` and
/// `applied_code = None` rather than an error, leaving it to the caller
/// to tell the customer the code did not apply.
///
/// Shipping is waived only when the selected option's tier qualifies
/// (standard) and the subtotal meets `config.free_shipping_threshold`.
pub fn price_cart(
    items: &[LineItem],
    promotion_code: Option<&str>,
    promotions: &PromotionCatalog,
    shipping_option: &ShippingOption,
    config: &PricingConfig,
) -> Result<PriceBreakdown, CommerceError> {
    config.validate()?;
    let currency = shipping_option.price.currency;

    let mut subtotal = Money::zero(currency);
    let mut item_savings = Money::zero(currency);
    for item in items {
        item.validate()?;
        subtotal = subtotal.try_add(&item.line_subtotal()?)?;
        item_savings = item_savings.try_add(&item.line_savings()?)?;
    }
    let subtotal_amount = subtotal.to_decimal();

    let (discount_amount, applied_code) = match promotion_code {
        Some(raw) => match promotions.lookup(raw) {
            Some(promotion) if promotion.is_eligible(subtotal) => (
                promotion.value.discount_for(subtotal_amount),
                Some(promotion.code.clone()),
            ),
            // Unknown code or minimum unmet: no discount, not an error.
            _ => (Decimal::ZERO, None),
        },
        None => (Decimal::ZERO, None),
    };

    let shipping = if shipping_option.qualifies_for_free_threshold()
        && subtotal.amount_cents >= config.free_shipping_threshold.amount_cents
    {
        Money::zero(currency)
    } else {
        shipping_option.price
    };

    let taxable = (subtotal_amount - discount_amount).max(Decimal::ZERO);
    let tax_amount = taxable * config.tax_rate;
    let total_amount = (subtotal_amount - discount_amount + shipping.to_decimal() + tax_amount)
        .max(Decimal::ZERO);

    Ok(PriceBreakdown {
        subtotal,
        item_savings,
        discount: Money::from_decimal(discount_amount, currency)?,
        shipping,
        tax: Money::from_decimal(tax_amount, currency)?,
        total: Money::from_decimal(total_amount, currency)?,
        applied_code,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::Promotion;
    use crate::checkout::ShippingTier;
    use crate::ids::ProductId;
    use crate::money::Currency;

    fn usd(cents: i64) -> Money {
        Money::new(cents, Currency::USD)
    }

    fn item(cents: i64, quantity: i64) -> LineItem {
        LineItem::new(ProductId::generate(), "Item", quantity, usd(cents), None).unwrap()
    }

    fn item_with_compare_at(cents: i64, compare_at: i64, quantity: i64) -> LineItem {
        LineItem::new(
            ProductId::generate(),
            "Item",
            quantity,
            usd(cents),
            Some(usd(compare_at)),
        )
        .unwrap()
    }

    fn standard_shipping(cents: i64) -> ShippingOption {
        ShippingOption::new(ShippingTier::Standard, "Standard Shipping", usd(cents))
    }

    fn express_shipping(cents: i64) -> ShippingOption {
        ShippingOption::new(ShippingTier::Express, "Express Shipping", usd(cents))
    }

    fn catalog() -> PromotionCatalog {
        [
            Promotion::percentage("SAVE20", dec!(20)),
            Promotion::fixed("FLAT20", usd(2000)),
            Promotion::percentage("BIG20", dec!(20)).with_minimum_subtotal(usd(100_00)),
            Promotion::percentage("HALF", dec!(50)),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_empty_cart() {
        let breakdown = price_cart(
            &[],
            None,
            &catalog(),
            &standard_shipping(999),
            &PricingConfig::default(),
        )
        .unwrap();

        assert_eq!(breakdown.subtotal, usd(0));
        assert_eq!(breakdown.item_savings, usd(0));
        assert_eq!(breakdown.discount, usd(0));
        assert_eq!(breakdown.shipping, usd(999));
        assert_eq!(breakdown.tax, usd(0));
        assert_eq!(breakdown.total, usd(999));
        assert_eq!(breakdown.applied_code, None);
    }

    #[test]
    fn test_free_shipping_threshold() {
        // Subtotal exactly at the threshold waives standard shipping.
        let breakdown = price_cart(
            &[item(100_00, 1)],
            None,
            &catalog(),
            &standard_shipping(999),
            &PricingConfig::default(),
        )
        .unwrap();
        assert_eq!(breakdown.shipping, usd(0));

        // Just below the threshold pays the nominal price.
        let breakdown = price_cart(
            &[item(99_99, 1)],
            None,
            &catalog(),
            &standard_shipping(999),
            &PricingConfig::default(),
        )
        .unwrap();
        assert_eq!(breakdown.shipping, usd(999));
    }

    #[test]
    fn test_free_shipping_only_for_standard_tier() {
        let breakdown = price_cart(
            &[item(150_00, 1)],
            None,
            &catalog(),
            &express_shipping(1999),
            &PricingConfig::default(),
        )
        .unwrap();
        assert_eq!(breakdown.shipping, usd(1999));
    }

    #[test]
    fn test_percentage_discount() {
        // 20% of $50.00 is $10.00.
        let breakdown = price_cart(
            &[item(50_00, 1)],
            Some("SAVE20"),
            &catalog(),
            &standard_shipping(999),
            &PricingConfig::default(),
        )
        .unwrap();
        assert_eq!(breakdown.discount, usd(10_00));
        assert_eq!(breakdown.applied_code.as_deref(), Some("SAVE20"));
        assert!(breakdown.discount.amount_cents <= breakdown.subtotal.amount_cents);
    }

    #[test]
    fn test_fixed_discount_capped_at_subtotal() {
        let breakdown = price_cart(
            &[item(15_00, 1)],
            Some("FLAT20"),
            &catalog(),
            &standard_shipping(999),
            &PricingConfig::default(),
        )
        .unwrap();
        assert_eq!(breakdown.discount, usd(15_00));
        assert_eq!(breakdown.applied_code.as_deref(), Some("FLAT20"));
    }

    #[test]
    fn test_minimum_subtotal_gating() {
        let breakdown = price_cart(
            &[item(80_00, 1)],
            Some("BIG20"),
            &catalog(),
            &standard_shipping(999),
            &PricingConfig::default(),
        )
        .unwrap();
        assert_eq!(breakdown.discount, usd(0));
        assert_eq!(breakdown.applied_code, None);
    }

    #[test]
    fn test_unknown_code_is_not_an_error() {
        let breakdown = price_cart(
            &[item(50_00, 1)],
            Some("DOESNOTEXIST"),
            &catalog(),
            &standard_shipping(999),
            &PricingConfig::default(),
        )
        .unwrap();
        assert_eq!(breakdown.discount, usd(0));
        assert_eq!(breakdown.applied_code, None);
    }

    #[test]
    fn test_code_matching_is_case_insensitive() {
        let breakdown = price_cart(
            &[item(50_00, 1)],
            Some("saVe20"),
            &catalog(),
            &standard_shipping(999),
            &PricingConfig::default(),
        )
        .unwrap();
        assert_eq!(breakdown.discount, usd(10_00));
        // Canonical casing comes back regardless of input casing.
        assert_eq!(breakdown.applied_code.as_deref(), Some("SAVE20"));
    }

    #[test]
    fn test_tax_on_post_discount_subtotal() {
        // Subtotal $50, 20% discount -> taxable $40, tax $3.20.
        let breakdown = price_cart(
            &[item(50_00, 1)],
            Some("SAVE20"),
            &catalog(),
            &standard_shipping(999),
            &PricingConfig::default(),
        )
        .unwrap();
        assert_eq!(breakdown.tax, usd(320));
        // total = 50 - 10 + 9.99 + 3.20
        assert_eq!(breakdown.total, usd(53_19));
    }

    #[test]
    fn test_tax_base_never_negative() {
        // Fixed discount equal to the whole subtotal: taxable base is zero.
        let breakdown = price_cart(
            &[item(15_00, 1)],
            Some("FLAT20"),
            &catalog(),
            &standard_shipping(999),
            &PricingConfig::default(),
        )
        .unwrap();
        assert_eq!(breakdown.tax, usd(0));
        assert_eq!(breakdown.total, usd(999));
    }

    #[test]
    fn test_item_savings() {
        let breakdown = price_cart(
            &[
                item_with_compare_at(39_00, 59_00, 2),
                item(10_00, 1),
            ],
            None,
            &catalog(),
            &standard_shipping(999),
            &PricingConfig::default(),
        )
        .unwrap();
        assert_eq!(breakdown.subtotal, usd(88_00));
        assert_eq!(breakdown.item_savings, usd(40_00));
    }

    #[test]
    fn test_purity() {
        let items = [item_with_compare_at(39_00, 59_00, 2), item(10_00, 1)];
        let promotions = catalog();
        let shipping = standard_shipping(999);
        let config = PricingConfig::default();

        let first = price_cart(&items, Some("SAVE20"), &promotions, &shipping, &config).unwrap();
        let second = price_cart(&items, Some("SAVE20"), &promotions, &shipping, &config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_rounding_half_up() {
        // $99.99 at 50% off: raw discount and raw total are both 49.995,
        // which rounds half-up to $50.00. Zero tax and free shipping keep
        // the midpoint intact.
        let config = PricingConfig::new(Decimal::ZERO, usd(100_00)).unwrap();
        let breakdown = price_cart(
            &[item(99_99, 1)],
            Some("HALF"),
            &catalog(),
            &standard_shipping(0),
            &config,
        )
        .unwrap();
        assert_eq!(breakdown.discount, usd(50_00));
        assert_eq!(breakdown.total, usd(50_00));
    }

    #[test]
    fn test_validation_errors_propagate() {
        let mut bad = item(10_00, 1);
        bad.quantity = 0;
        let result = price_cart(
            &[bad],
            None,
            &catalog(),
            &standard_shipping(999),
            &PricingConfig::default(),
        );
        assert!(matches!(result, Err(CommerceError::InvalidQuantity(0))));
        assert!(result.unwrap_err().is_validation());

        let mut bad = item(10_00, 1);
        bad.unit_price = usd(-1);
        let result = price_cart(
            &[bad],
            None,
            &catalog(),
            &standard_shipping(999),
            &PricingConfig::default(),
        );
        assert!(matches!(result, Err(CommerceError::NegativeUnitPrice(-1))));

        let mut bad = item(50_00, 1);
        bad.compare_at_unit_price = Some(usd(40_00));
        let result = price_cart(
            &[bad],
            None,
            &catalog(),
            &standard_shipping(999),
            &PricingConfig::default(),
        );
        assert!(matches!(
            result,
            Err(CommerceError::CompareAtBelowUnitPrice { .. })
        ));
    }

    #[test]
    fn test_invalid_tax_rate_rejected() {
        let result = PricingConfig::new(dec!(1.5), usd(100_00));
        assert!(matches!(result, Err(CommerceError::InvalidTaxRate(_))));

        let result = PricingConfig::new(dec!(-0.1), usd(100_00));
        assert!(matches!(result, Err(CommerceError::InvalidTaxRate(_))));
    }

    #[test]
    fn test_negative_threshold_rejected() {
        let result = PricingConfig::new(dec!(0.08), usd(-1));
        assert!(matches!(result, Err(CommerceError::NegativeThreshold(-1))));
        assert_eq!(
            result.unwrap_err().to_string(),
            "Negative free-shipping threshold: -1 cents"
        );
    }

    #[test]
    fn test_inputs_not_mutated() {
        let items = [item_with_compare_at(39_00, 59_00, 2)];
        let snapshot = items.clone();
        let promotions = catalog();
        let promotions_snapshot = promotions.clone();

        price_cart(
            &items,
            Some("SAVE20"),
            &promotions,
            &standard_shipping(999),
            &PricingConfig::default(),
        )
        .unwrap();

        assert_eq!(items, snapshot);
        assert_eq!(promotions, promotions_snapshot);
    }
}
