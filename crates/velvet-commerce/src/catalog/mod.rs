//! Product catalog: products and categories.

mod category;
mod product;

pub use category::Category;
pub use product::Product;
