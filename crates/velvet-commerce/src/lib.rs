//! E-commerce domain types and pricing logic for Velvet.
//!
//! This crate is pure: no I/O, no async, no clock-dependent pricing.
//! It provides:
//!
//! - **Catalog**: products with compare-at prices, categories
//! - **Cart**: line items, promotion codes, and the pricing engine
//! - **Checkout**: shipping options, the step flow, orders
//! - **Wishlist**: per-user saved products
//!
//! # Example
//!
//! ```rust
//! use velvet_commerce::prelude::*;
//!
//! let mut cart = Cart::new("session-1");
//! cart.add_item(
//!     ProductId::new("prod-1"),
//!     "Velvet Blazer",
//!     1,
//!     Money::new(12900, Currency::USD),
//!     None,
//! ).unwrap();
//!
//! let promotions: PromotionCatalog =
//!     [Promotion::percentage("WELCOME10", rust_decimal_macros::dec!(10))]
//!         .into_iter()
//!         .collect();
//! let shipping = ShippingOption::new(
//!     ShippingTier::Standard,
//!     "Standard Shipping",
//!     Money::new(999, Currency::USD),
//! );
//!
//! let breakdown = price_cart(
//!     &cart.items,
//!     Some("welcome10"),
//!     &promotions,
//!     &shipping,
//!     &PricingConfig::default(),
//! ).unwrap();
//! assert_eq!(breakdown.applied_code.as_deref(), Some("WELCOME10"));
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod wishlist;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Category, Product};

    // Cart
    pub use crate::cart::{
        price_cart, Cart, LineItem, PriceBreakdown, PricingConfig, Promotion, PromotionCatalog,
        PromotionValue,
    };

    // Checkout
    pub use crate::checkout::{
        Address, CheckoutFlow, CheckoutStep, FinancialStatus, Order, OrderLineItem, OrderStatus,
        ShippingOption, ShippingTier,
    };

    // Wishlist
    pub use crate::wishlist::Wishlist;
}
