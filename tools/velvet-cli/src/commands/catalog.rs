//! Catalog browsing commands.

use anyhow::{bail, Result};
use velvet_commerce::catalog::Product;
use velvet_store::Storefront;

use super::{CatalogArgs, CatalogCommand};
use crate::output::Output;

/// Run the catalog command.
pub fn run(args: CatalogArgs, store: &Storefront, output: &Output) -> Result<()> {
    match args.command {
        Some(CatalogCommand::List) | None => list_products(&args, store, output),
        Some(CatalogCommand::Categories) => list_categories(store, output),
        Some(CatalogCommand::Show { product }) => show_product(&product, store, output),
    }
}

fn list_categories(store: &Storefront, output: &Output) -> Result<()> {
    let categories = store.categories_in_order();

    if output.is_json() {
        output.json(&categories);
        return Ok(());
    }

    output.header("Categories");
    for category in &categories {
        let count = store.products_in_category(&category.id).len();
        output.list_item(&format!("{}  ({} products)", category.name, count));
        if let Some(description) = &category.description {
            output.debug(description);
        }
    }
    Ok(())
}

fn list_products(args: &CatalogArgs, store: &Storefront, output: &Output) -> Result<()> {
    let products: Vec<&Product> = if args.featured {
        store.featured_products()
    } else {
        store.products.list().collect()
    };

    if output.is_json() {
        output.json(&products);
        return Ok(());
    }

    output.header(if args.featured {
        "Featured products"
    } else {
        "Products"
    });

    for product in &products {
        let mut line = format!("{}  {}  {}", product.sku, product.name, product.price);
        if product.is_on_sale() {
            if let Some(compare_at) = product.compare_at_price {
                line.push_str(&format!(" (was {})", compare_at));
            }
        }
        if !product.in_stock {
            line.push_str(" [out of stock]");
        }
        output.list_item(&line);
    }

    output.info(&format!("{} products", products.len()));
    Ok(())
}

fn show_product(query: &str, store: &Storefront, output: &Output) -> Result<()> {
    let Some(product) = store
        .product_by_sku(query)
        .or_else(|| store.product_by_slug(query))
    else {
        bail!("Product not found: {}", query);
    };

    if output.is_json() {
        output.json(product);
        return Ok(());
    }

    output.header(&product.name);
    output.kv("sku", &product.sku);
    output.kv("slug", &product.slug);
    output.kv("price", &product.price.display());
    if let Some(compare_at) = product.compare_at_price {
        output.kv("compare at", &compare_at.display());
        output.kv("you save", &product.savings_per_unit().display());
    }
    if let Some(description) = &product.description {
        output.kv("description", description);
    }
    if let Some(category_id) = &product.category_id {
        if let Some(category) = store.categories.get(category_id.as_str()) {
            output.kv("category", &category.name);
        }
    }
    if !product.tags.is_empty() {
        output.kv("tags", &product.tags.join(", "));
    }
    output.kv("in stock", if product.in_stock { "yes" } else { "no" });
    Ok(())
}
