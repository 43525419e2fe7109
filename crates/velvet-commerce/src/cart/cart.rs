//! Cart and line item types.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::{CartId, LineItemId, ProductId, UserId};
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed per line item.
pub const MAX_QUANTITY_PER_ITEM: i64 = 99;

/// A shopping cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    /// Unique cart identifier.
    pub id: CartId,
    /// Session ID for anonymous carts.
    pub session_id: String,
    /// User ID for authenticated carts.
    pub user_id: Option<UserId>,
    /// Items in the cart, in insertion order.
    pub items: Vec<LineItem>,
    /// Promotion code the customer entered, if any. Resolution against
    /// the promotion catalog happens at pricing time.
    pub promotion_code: Option<String>,
    /// Cart currency.
    pub currency: Currency,
    /// Customer note.
    pub note: Option<String>,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
}

impl Cart {
    /// Create a new cart for a session.
    pub fn new(session_id: impl Into<String>) -> Self {
        let now = current_timestamp();
        Self {
            id: CartId::generate(),
            session_id: session_id.into(),
            user_id: None,
            items: Vec::new(),
            promotion_code: None,
            currency: Currency::USD,
            note: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a cart for an authenticated user.
    pub fn for_user(user_id: UserId, session_id: impl Into<String>) -> Self {
        let mut cart = Self::new(session_id);
        cart.user_id = Some(user_id);
        cart
    }

    /// Add an item to the cart. If the product is already present, the
    /// quantities merge.
    ///
    /// Returns an error if:
    /// - Quantity is not positive
    /// - The line would exceed MAX_QUANTITY_PER_ITEM
    /// - The line item fails price validation
    pub fn add_item(
        &mut self,
        product_id: ProductId,
        product_name: impl Into<String>,
        quantity: i64,
        unit_price: Money,
        compare_at_unit_price: Option<Money>,
    ) -> Result<LineItemId, CommerceError> {
        if quantity <= 0 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }

        if let Some(existing) = self.items.iter_mut().find(|i| i.product_id == product_id) {
            let new_quantity = existing
                .quantity
                .checked_add(quantity)
                .ok_or(CommerceError::Overflow)?;
            if new_quantity > MAX_QUANTITY_PER_ITEM {
                return Err(CommerceError::QuantityExceedsLimit(
                    new_quantity,
                    MAX_QUANTITY_PER_ITEM,
                ));
            }
            existing.quantity = new_quantity;
            self.updated_at = current_timestamp();
            return Ok(existing.id.clone());
        }

        if quantity > MAX_QUANTITY_PER_ITEM {
            return Err(CommerceError::QuantityExceedsLimit(
                quantity,
                MAX_QUANTITY_PER_ITEM,
            ));
        }

        let item = LineItem::new(
            product_id,
            product_name,
            quantity,
            unit_price,
            compare_at_unit_price,
        )?;
        let id = item.id.clone();
        self.items.push(item);
        self.updated_at = current_timestamp();
        Ok(id)
    }

    /// Add a catalog product to the cart, snapshotting its prices.
    pub fn add_product(
        &mut self,
        product: &Product,
        quantity: i64,
    ) -> Result<LineItemId, CommerceError> {
        product.validate()?;
        self.add_item(
            product.id.clone(),
            product.name.clone(),
            quantity,
            product.price,
            product.compare_at_price,
        )
    }

    /// Update item quantity. A quantity of zero or less removes the item.
    pub fn update_quantity(
        &mut self,
        line_item_id: &LineItemId,
        quantity: i64,
    ) -> Result<bool, CommerceError> {
        if quantity <= 0 {
            return Ok(self.remove_item(line_item_id));
        }
        if quantity > MAX_QUANTITY_PER_ITEM {
            return Err(CommerceError::QuantityExceedsLimit(
                quantity,
                MAX_QUANTITY_PER_ITEM,
            ));
        }

        if let Some(item) = self.items.iter_mut().find(|i| &i.id == line_item_id) {
            item.quantity = quantity;
            self.updated_at = current_timestamp();
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Remove an item from the cart.
    pub fn remove_item(&mut self, line_item_id: &LineItemId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.id != line_item_id);
        let removed = self.items.len() < len_before;
        if removed {
            self.updated_at = current_timestamp();
        }
        removed
    }

    /// Clear all items and any entered promotion code.
    pub fn clear(&mut self) {
        self.items.clear();
        self.promotion_code = None;
        self.updated_at = current_timestamp();
    }

    /// Set or clear the entered promotion code.
    pub fn set_promotion_code(&mut self, code: Option<String>) {
        self.promotion_code = code;
        self.updated_at = current_timestamp();
    }

    /// Get total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Get number of unique items.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get an item by ID.
    pub fn get_item(&self, line_item_id: &LineItemId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.id == line_item_id)
    }

    /// Get an item by product ID.
    pub fn get_item_by_product(&self, product_id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.product_id == product_id)
    }

    /// Attach the cart to an authenticated user.
    pub fn set_user(&mut self, user_id: UserId) {
        self.user_id = Some(user_id);
        self.updated_at = current_timestamp();
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new("anonymous")
    }
}

/// A line item in the cart. Prices are snapshots taken when the item was
/// added; pricing never mutates them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Unique line item identifier.
    pub id: LineItemId,
    /// Product being purchased.
    pub product_id: ProductId,
    /// Product name (denormalized for display).
    pub product_name: String,
    /// Quantity.
    pub quantity: i64,
    /// Unit price.
    pub unit_price: Money,
    /// Compare-at unit price, when the product is marked down.
    pub compare_at_unit_price: Option<Money>,
}

impl LineItem {
    /// Create a new line item, validating its invariants.
    pub fn new(
        product_id: ProductId,
        product_name: impl Into<String>,
        quantity: i64,
        unit_price: Money,
        compare_at_unit_price: Option<Money>,
    ) -> Result<Self, CommerceError> {
        let item = Self {
            id: LineItemId::generate(),
            product_id,
            product_name: product_name.into(),
            quantity,
            unit_price,
            compare_at_unit_price,
        };
        item.validate()?;
        Ok(item)
    }

    /// Validate the line item invariants: quantity at least 1, unit price
    /// non-negative, compare-at price (when present) at least the unit price.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.quantity < 1 {
            return Err(CommerceError::InvalidQuantity(self.quantity));
        }
        if self.unit_price.is_negative() {
            return Err(CommerceError::NegativeUnitPrice(
                self.unit_price.amount_cents,
            ));
        }
        if let Some(compare_at) = &self.compare_at_unit_price {
            if compare_at.amount_cents < self.unit_price.amount_cents {
                return Err(CommerceError::CompareAtBelowUnitPrice {
                    compare_at_cents: compare_at.amount_cents,
                    unit_cents: self.unit_price.amount_cents,
                });
            }
        }
        Ok(())
    }

    /// Line subtotal (unit price x quantity).
    pub fn line_subtotal(&self) -> Result<Money, CommerceError> {
        self.unit_price.try_mul(self.quantity)
    }

    /// Savings against the compare-at price for this line, floored at zero.
    pub fn line_savings(&self) -> Result<Money, CommerceError> {
        let per_unit = self
            .compare_at_unit_price
            .map(|c| (c.amount_cents - self.unit_price.amount_cents).max(0))
            .unwrap_or(0);
        Money::new(per_unit, self.unit_price.currency).try_mul(self.quantity)
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

    fn usd(cents: i64) -> Money {
        Money::new(cents, Currency::USD)
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::new("session-123");
        assert!(cart.is_empty());
        assert_eq!(cart.session_id, "session-123");
    }

    #[test]
    fn test_add_item() {
        let mut cart = Cart::new("session-123");
        cart.add_item(ProductId::new("prod-1"), "Blazer", 2, usd(12900), None)
            .unwrap();

        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.unique_item_count(), 1);
    }

    #[test]
    fn test_add_same_product_merges_quantity() {
        let mut cart = Cart::new("session-123");
        let product_id = ProductId::new("prod-1");

        cart.add_item(product_id.clone(), "Blazer", 1, usd(12900), None)
            .unwrap();
        cart.add_item(product_id.clone(), "Blazer", 2, usd(12900), None)
            .unwrap();

        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_update_quantity_and_remove() {
        let mut cart = Cart::new("session-123");
        let line_id = cart
            .add_item(ProductId::new("prod-1"), "Blazer", 1, usd(12900), None)
            .unwrap();

        cart.update_quantity(&line_id, 5).unwrap();
        assert_eq!(cart.item_count(), 5);

        // Zero removes the line
        cart.update_quantity(&line_id, 0).unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_quantity_limit() {
        let mut cart = Cart::new("session-123");
        let result = cart.add_item(
            ProductId::new("prod-1"),
            "Blazer",
            MAX_QUANTITY_PER_ITEM + 1,
            usd(12900),
            None,
        );
        assert!(matches!(
            result,
            Err(CommerceError::QuantityExceedsLimit(_, _))
        ));
    }

    #[test]
    fn test_invalid_quantity() {
        let mut cart = Cart::new("session-123");
        let result = cart.add_item(ProductId::new("prod-1"), "Blazer", 0, usd(12900), None);
        assert!(matches!(result, Err(CommerceError::InvalidQuantity(0))));
    }

    #[test]
    fn test_line_item_validation() {
        let negative = LineItem::new(ProductId::new("p"), "Item", 1, usd(-100), None);
        assert!(matches!(
            negative,
            Err(CommerceError::NegativeUnitPrice(-100))
        ));

        let inverted = LineItem::new(ProductId::new("p"), "Item", 1, usd(5000), Some(usd(4000)));
        assert!(matches!(
            inverted,
            Err(CommerceError::CompareAtBelowUnitPrice { .. })
        ));
    }

    #[test]
    fn test_line_savings() {
        let item =
            LineItem::new(ProductId::new("p"), "Scarf", 2, usd(3900), Some(usd(5900))).unwrap();
        assert_eq!(item.line_savings().unwrap().amount_cents, 4000);
        assert_eq!(item.line_subtotal().unwrap().amount_cents, 7800);
    }

    #[test]
    fn test_add_product_snapshot() {
        let product = Product::new("VLV-001", "Velvet Blazer", "velvet-blazer", usd(12900))
            .with_compare_at_price(usd(15900));
        let mut cart = Cart::new("session-123");
        cart.add_product(&product, 1).unwrap();

        let item = cart.get_item_by_product(&product.id).unwrap();
        assert_eq!(item.unit_price.amount_cents, 12900);
        assert_eq!(item.compare_at_unit_price.unwrap().amount_cents, 15900);
    }
}
