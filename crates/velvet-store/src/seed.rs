//! Seed data and the storefront state.
//!
//! Fixtures are compiled into the binary with `include_str!`, so a
//! seeded storefront needs no filesystem access at runtime.

use velvet_commerce::cart::{Cart, Promotion, PromotionCatalog};
use velvet_commerce::catalog::{Category, Product};
use velvet_commerce::ids::CategoryId;
use velvet_commerce::checkout::{Order, ShippingOption, ShippingTier};
use velvet_commerce::wishlist::Wishlist;

use crate::error::StoreError;
use crate::memory::{MemoryStore, Record};

const CATEGORIES_JSON: &str = include_str!("../fixtures/categories.json");
const PRODUCTS_JSON: &str = include_str!("../fixtures/products.json");
const PROMOTIONS_JSON: &str = include_str!("../fixtures/promotions.json");
const SHIPPING_JSON: &str = include_str!("../fixtures/shipping.json");

impl Record for Category {
    const ENTITY: &'static str = "category";

    fn record_id(&self) -> String {
        self.id.as_str().to_string()
    }
}

impl Record for Product {
    const ENTITY: &'static str = "product";

    fn record_id(&self) -> String {
        self.id.as_str().to_string()
    }
}

impl Record for ShippingOption {
    const ENTITY: &'static str = "shipping option";

    fn record_id(&self) -> String {
        self.id.as_str().to_string()
    }
}

impl Record for Cart {
    const ENTITY: &'static str = "cart";

    fn record_id(&self) -> String {
        self.id.as_str().to_string()
    }
}

impl Record for Order {
    const ENTITY: &'static str = "order";

    fn record_id(&self) -> String {
        self.id.as_str().to_string()
    }
}

impl Record for Wishlist {
    const ENTITY: &'static str = "wishlist";

    fn record_id(&self) -> String {
        self.id.as_str().to_string()
    }
}

/// All storefront state for a single-process deployment.
///
/// Products, promotions, and shipping options are seeded from fixtures;
/// carts, orders, and wishlists start empty and accumulate at runtime.
#[derive(Debug, Clone, Default)]
pub struct Storefront {
    pub categories: MemoryStore<Category>,
    pub products: MemoryStore<Product>,
    pub shipping_options: MemoryStore<ShippingOption>,
    pub promotions: PromotionCatalog,
    pub carts: MemoryStore<Cart>,
    pub orders: MemoryStore<Order>,
    pub wishlists: MemoryStore<Wishlist>,
}

impl Storefront {
    /// Create an empty storefront with no catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a storefront seeded from the bundled fixtures.
    pub fn seeded() -> Result<Self, StoreError> {
        let categories: Vec<Category> = serde_json::from_str(CATEGORIES_JSON)?;
        let products: Vec<Product> = serde_json::from_str(PRODUCTS_JSON)?;
        let promotions: Vec<Promotion> = serde_json::from_str(PROMOTIONS_JSON)?;
        let shipping: Vec<ShippingOption> = serde_json::from_str(SHIPPING_JSON)?;

        for product in &products {
            product
                .validate()
                .map_err(|e| StoreError::Fixture(format!("{}: {}", product.sku, e)))?;
            if let Some(category_id) = &product.category_id {
                if !categories.iter().any(|c| &c.id == category_id) {
                    return Err(StoreError::Fixture(format!(
                        "{}: unknown category {}",
                        product.sku, category_id
                    )));
                }
            }
        }

        Ok(Self {
            categories: categories.into_iter().collect(),
            products: products.into_iter().collect(),
            shipping_options: shipping.into_iter().collect(),
            promotions: promotions.into_iter().collect(),
            carts: MemoryStore::new(),
            orders: MemoryStore::new(),
            wishlists: MemoryStore::new(),
        })
    }

    /// Look up a product by SKU.
    pub fn product_by_sku(&self, sku: &str) -> Option<&Product> {
        self.products.find(|p| p.sku.eq_ignore_ascii_case(sku))
    }

    /// Look up a product by slug.
    pub fn product_by_slug(&self, slug: &str) -> Option<&Product> {
        self.products.find(|p| p.slug == slug)
    }

    /// Look up a category by slug.
    pub fn category_by_slug(&self, slug: &str) -> Option<&Category> {
        self.categories.find(|c| c.slug == slug)
    }

    /// Categories in navigation order.
    pub fn categories_in_order(&self) -> Vec<&Category> {
        let mut categories: Vec<&Category> = self.categories.list().collect();
        categories.sort_by_key(|c| c.position);
        categories
    }

    /// Products in a category, in catalog order.
    pub fn products_in_category<'a>(&'a self, category_id: &'a CategoryId) -> Vec<&'a Product> {
        self.products
            .filter(|p| p.category_id.as_ref() == Some(category_id))
            .collect()
    }

    /// Look up a shipping option by tier.
    pub fn shipping_option_for_tier(&self, tier: ShippingTier) -> Option<&ShippingOption> {
        self.shipping_options.find(|s| s.tier == tier)
    }

    /// Featured, in-stock products for the landing page.
    pub fn featured_products(&self) -> Vec<&Product> {
        self.products
            .filter(|p| p.featured && p.in_stock)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use velvet_commerce::cart::PromotionValue;
    use velvet_commerce::money::{Currency, Money};

    #[test]
    fn test_seeded_storefront_loads_fixtures() {
        let store = Storefront::seeded().unwrap();
        assert_eq!(store.categories.len(), 4);
        assert_eq!(store.products.len(), 6);
        assert_eq!(store.shipping_options.len(), 3);
        assert_eq!(store.promotions.len(), 4);
        assert!(store.carts.is_empty());
        assert!(store.orders.is_empty());
    }

    #[test]
    fn test_seeded_products_are_valid() {
        let store = Storefront::seeded().unwrap();
        for product in store.products.list() {
            assert!(product.validate().is_ok(), "invalid fixture: {}", product.sku);
        }
    }

    #[test]
    fn test_product_lookups() {
        let store = Storefront::seeded().unwrap();

        let blazer = store.product_by_sku("vlv-001").unwrap();
        assert_eq!(blazer.name, "Velvet Blazer");
        assert_eq!(blazer.price, Money::new(12900, Currency::USD));
        assert!(blazer.is_on_sale());

        assert!(store.product_by_slug("wool-overcoat").is_some());
        assert!(store.product_by_sku("VLV-999").is_none());
    }

    #[test]
    fn test_shipping_tiers_present() {
        let store = Storefront::seeded().unwrap();
        let standard = store.shipping_option_for_tier(ShippingTier::Standard).unwrap();
        assert_eq!(standard.price, Money::new(999, Currency::USD));
        assert!(standard.qualifies_for_free_threshold());

        let express = store.shipping_option_for_tier(ShippingTier::Express).unwrap();
        assert!(!express.qualifies_for_free_threshold());
        assert!(store.shipping_option_for_tier(ShippingTier::Overnight).is_some());
    }

    #[test]
    fn test_seeded_promotions() {
        let store = Storefront::seeded().unwrap();

        let welcome = store.promotions.lookup("welcome10").unwrap();
        assert_eq!(welcome.code, "WELCOME10");
        assert_eq!(welcome.value, PromotionValue::Percentage(dec!(10)));
        assert!(welcome.minimum_subtotal.is_none());

        let flat = store.promotions.lookup("FLAT15").unwrap();
        assert_eq!(
            flat.value,
            PromotionValue::Fixed(Money::new(1500, Currency::USD))
        );
        assert_eq!(flat.minimum_subtotal, Some(Money::new(5000, Currency::USD)));

        // Retired promotion loads but is inactive.
        let retired = store.promotions.lookup("SUMMER24").unwrap();
        assert!(!retired.active);
    }

    #[test]
    fn test_category_lookups() {
        let store = Storefront::seeded().unwrap();

        let ordered: Vec<&str> = store
            .categories_in_order()
            .iter()
            .map(|c| c.slug.as_str())
            .collect();
        assert_eq!(ordered, vec!["outerwear", "knitwear", "shirts", "accessories"]);

        let outerwear = store.category_by_slug("outerwear").unwrap();
        let products = store.products_in_category(&outerwear.id);
        assert_eq!(products.len(), 2);
        assert!(products.iter().all(|p| p.category_id == Some(outerwear.id.clone())));
    }

    #[test]
    fn test_every_product_category_is_seeded() {
        let store = Storefront::seeded().unwrap();
        for product in store.products.list() {
            if let Some(category_id) = &product.category_id {
                assert!(
                    store.categories.get(category_id.as_str()).is_some(),
                    "{} references unseeded category {}",
                    product.sku,
                    category_id
                );
            }
        }
    }

    #[test]
    fn test_featured_products_excludes_out_of_stock() {
        let store = Storefront::seeded().unwrap();
        let featured = store.featured_products();
        assert_eq!(featured.len(), 3);
        assert!(featured.iter().all(|p| p.in_stock));
    }
}
