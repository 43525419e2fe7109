//! Per-user wishlist.

use crate::ids::{ProductId, UserId, WishlistId};
use serde::{Deserialize, Serialize};

/// A user's wishlist: an ordered set of product IDs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Wishlist {
    /// Unique wishlist identifier.
    pub id: WishlistId,
    /// Owning user.
    pub user_id: UserId,
    /// Saved products, in the order they were added.
    pub product_ids: Vec<ProductId>,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
}

impl Wishlist {
    /// Create an empty wishlist for a user.
    pub fn new(user_id: UserId) -> Self {
        let now = current_timestamp();
        Self {
            id: WishlistId::generate(),
            user_id,
            product_ids: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if a product is saved.
    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.product_ids.contains(product_id)
    }

    /// Add a product. Returns false if it was already saved.
    pub fn add(&mut self, product_id: ProductId) -> bool {
        if self.contains(&product_id) {
            return false;
        }
        self.product_ids.push(product_id);
        self.updated_at = current_timestamp();
        true
    }

    /// Remove a product. Returns false if it was not saved.
    pub fn remove(&mut self, product_id: &ProductId) -> bool {
        let len_before = self.product_ids.len();
        self.product_ids.retain(|p| p != product_id);
        let removed = self.product_ids.len() < len_before;
        if removed {
            self.updated_at = current_timestamp();
        }
        removed
    }

    /// Toggle a product: add if absent, remove if present. Returns true
    /// if the product is saved after the call.
    pub fn toggle(&mut self, product_id: ProductId) -> bool {
        if self.remove(&product_id) {
            false
        } else {
            self.add(product_id)
        }
    }

    /// Number of saved products.
    pub fn len(&self) -> usize {
        self.product_ids.len()
    }

    /// Check if the wishlist is empty.
    pub fn is_empty(&self) -> bool {
        self.product_ids.is_empty()
    }

    /// Remove all saved products.
    pub fn clear(&mut self) {
        self.product_ids.clear();
        self.updated_at = current_timestamp();
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

    #[test]
    fn test_add_and_remove() {
        let mut wishlist = Wishlist::new(UserId::new("user-1"));
        let product = ProductId::new("prod-1");

        assert!(wishlist.add(product.clone()));
        assert!(wishlist.contains(&product));
        // Adding twice is a no-op.
        assert!(!wishlist.add(product.clone()));
        assert_eq!(wishlist.len(), 1);

        assert!(wishlist.remove(&product));
        assert!(wishlist.is_empty());
        assert!(!wishlist.remove(&product));
    }

    #[test]
    fn test_toggle() {
        let mut wishlist = Wishlist::new(UserId::new("user-1"));
        let product = ProductId::new("prod-1");

        assert!(wishlist.toggle(product.clone()));
        assert!(wishlist.contains(&product));
        assert!(!wishlist.toggle(product.clone()));
        assert!(!wishlist.contains(&product));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut wishlist = Wishlist::new(UserId::new("user-1"));
        wishlist.add(ProductId::new("a"));
        wishlist.add(ProductId::new("b"));
        wishlist.add(ProductId::new("c"));
        wishlist.remove(&ProductId::new("b"));

        let ids: Vec<&str> = wishlist.product_ids.iter().map(|p| p.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }
}
