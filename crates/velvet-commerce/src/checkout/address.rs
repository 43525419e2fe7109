//! Shipping and billing addresses.

use serde::{Deserialize, Serialize};

/// A postal address.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Address {
    /// Recipient first name.
    pub first_name: String,
    /// Recipient last name.
    pub last_name: String,
    /// Street address, line 1.
    pub line1: String,
    /// Street address, line 2 (apartment, suite).
    pub line2: Option<String>,
    /// City.
    pub city: String,
    /// State / province / region.
    pub region: String,
    /// Postal or ZIP code.
    pub postal_code: String,
    /// ISO country code.
    pub country: String,
}

impl Address {
    /// Check if all required fields are filled in.
    pub fn is_complete(&self) -> bool {
        !self.first_name.is_empty()
            && !self.last_name.is_empty()
            && !self.line1.is_empty()
            && !self.city.is_empty()
            && !self.postal_code.is_empty()
            && !self.country.is_empty()
    }

    /// Full recipient name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
