//! Category types.

use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};

/// A product category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// URL-friendly slug (unique).
    pub slug: String,
    /// Description for the category page.
    pub description: Option<String>,
    /// Sort position in navigation.
    pub position: i32,
}

impl Category {
    /// Create a new category.
    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: CategoryId::generate(),
            name: name.into(),
            slug: slug.into(),
            description: None,
            position: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_creation() {
        let cat = Category::new("Outerwear", "outerwear");
        assert_eq!(cat.slug, "outerwear");
        assert_eq!(cat.position, 0);
    }
}
