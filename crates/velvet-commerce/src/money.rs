//! Money type for representing monetary values.
//!
//! Amounts at rest are integer cents, which sidesteps floating-point
//! precision issues. Pricing intermediates that need sub-cent precision
//! (percentage discounts, tax) go through [`rust_decimal::Decimal`] and
//! come back to cents via [`Money::from_decimal`], which rounds half-up.

use crate::error::CommerceError;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Supported currencies. All carry two decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
}

impl Currency {
    /// Get the currency code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::CAD => "CAD",
        }
    }

    /// Get the currency symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::CAD => "CA$",
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            "CAD" => Some(Currency::CAD),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency, stored as integer cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in the smallest currency unit (cents).
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from cents.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.amount_cents > 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount_cents < 0
    }

    /// Convert to an exact decimal amount in major units (e.g., dollars).
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.amount_cents, 2)
    }

    /// Convert a decimal amount in major units to Money, rounding half-up
    /// to whole cents. Half-up and midpoint-away-from-zero coincide on the
    /// non-negative amounts produced by pricing.
    pub fn from_decimal(amount: Decimal, currency: Currency) -> Result<Self, CommerceError> {
        let cents = (amount * Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_i64()
            .ok_or(CommerceError::Overflow)?;
        Ok(Self::new(cents, currency))
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        let sign = if self.amount_cents < 0 { "-" } else { "" };
        let abs = self.amount_cents.abs();
        format!("{}{}{}.{:02}", sign, self.currency.symbol(), abs / 100, abs % 100)
    }

    /// Add another Money value, checking currency and overflow.
    pub fn try_add(&self, other: &Money) -> Result<Money, CommerceError> {
        self.check_currency(other)?;
        let cents = self
            .amount_cents
            .checked_add(other.amount_cents)
            .ok_or(CommerceError::Overflow)?;
        Ok(Money::new(cents, self.currency))
    }

    /// Subtract another Money value, checking currency and overflow.
    pub fn try_sub(&self, other: &Money) -> Result<Money, CommerceError> {
        self.check_currency(other)?;
        let cents = self
            .amount_cents
            .checked_sub(other.amount_cents)
            .ok_or(CommerceError::Overflow)?;
        Ok(Money::new(cents, self.currency))
    }

    /// Multiply by a scalar, checking overflow.
    pub fn try_mul(&self, factor: i64) -> Result<Money, CommerceError> {
        let cents = self
            .amount_cents
            .checked_mul(factor)
            .ok_or(CommerceError::Overflow)?;
        Ok(Money::new(cents, self.currency))
    }

    /// Sum an iterator of Money values, checking currency and overflow.
    pub fn try_sum<'a>(
        iter: impl Iterator<Item = &'a Money>,
        currency: Currency,
    ) -> Result<Money, CommerceError> {
        let mut acc = Money::zero(currency);
        for m in iter {
            acc = acc.try_add(m)?;
        }
        Ok(acc)
    }

    fn check_currency(&self, other: &Money) -> Result<(), CommerceError> {
        if self.currency != other.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: other.currency.code().to_string(),
            });
        }
        Ok(())
    }
}

impl Add for Money {
    type Output = Money;

    /// # Panics
    /// Panics on currency mismatch or overflow. Use `try_add` in code
    /// that must propagate errors.
    fn add(self, other: Money) -> Money {
        self.try_add(&other).expect("money addition failed")
    }
}

impl Sub for Money {
    type Output = Money;

    /// # Panics
    /// Panics on currency mismatch or overflow. Use `try_sub` in code
    /// that must propagate errors.
    fn sub(self, other: Money) -> Money {
        self.try_sub(&other).expect("money subtraction failed")
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    /// # Panics
    /// Panics on overflow. Use `try_mul` in code that must propagate errors.
    fn mul(self, factor: i64) -> Money {
        self.try_mul(factor).expect("money multiplication failed")
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
