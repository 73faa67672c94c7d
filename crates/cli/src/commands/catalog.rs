//! Catalog browsing commands.

use bozor_core::{Product, ProductId};
use bozor_storefront::{AppState, format::format_sum};

/// Print the first `limit` products of the catalog.
pub async fn list(state: &AppState, limit: u32) -> Result<(), Box<dyn std::error::Error>> {
    let products = state.catalog().products(limit).await?;
    print_listing(&products);
    Ok(())
}

/// Print one product in full.
pub async fn show(state: &AppState, id: ProductId) -> Result<(), Box<dyn std::error::Error>> {
    let product = state.catalog().product(id).await?;

    println!("#{} {}", product.id, product.title);
    println!("  {}", product.description);
    println!(
        "  price: {}  discount: {}%  rating: {}",
        format_sum(product.price),
        product.discount_percentage,
        product.rating
    );
    println!(
        "  stock: {}  brand: {}  category: {}",
        product.stock, product.brand, product.category
    );
    Ok(())
}

/// Print every product in a category.
pub async fn category(state: &AppState, slug: &str) -> Result<(), Box<dyn std::error::Error>> {
    let products = state.catalog().products_by_category(slug).await?;
    if products.is_empty() {
        println!("no products in category {slug}");
        return Ok(());
    }
    print_listing(&products);
    Ok(())
}

fn print_listing(products: &[Product]) {
    for product in products {
        println!(
            "#{:<5} {:<40} {:>12}  (stock {})",
            product.id.get(),
            product.title,
            format_sum(product.price),
            product.stock
        );
    }
}
