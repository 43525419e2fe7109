//! In-memory data store and seed fixtures for Velvet.
//!
//! All data lives in process memory, seeded from JSON fixtures at
//! startup. There is no external database; per-session and per-user
//! state (carts, orders, wishlists) accumulates in the same stores.
//!
//! # Example
//!
//! ```rust
//! use velvet_store::Storefront;
//!
//! let store = Storefront::seeded().unwrap();
//! let blazer = store.product_by_sku("VLV-001").unwrap();
//! assert!(blazer.is_on_sale());
//! ```

mod error;
mod memory;
mod seed;

pub use error::StoreError;
pub use memory::{MemoryStore, Record};
pub use seed::Storefront;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{MemoryStore, Record, StoreError, Storefront};
}
