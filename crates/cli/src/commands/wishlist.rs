//! Wishlist commands.

use bozor_core::ProductId;
use bozor_storefront::{AppState, format::format_sum};

/// Print the liked products.
pub fn list(state: &AppState) {
    let entries = state.wishlist().all();

    if entries.is_empty() {
        println!("wishlist is empty");
        return;
    }

    for entry in &entries {
        println!(
            "#{:<5} {:<40} {:>12}",
            entry.id.get(),
            entry.title,
            format_sum(entry.price)
        );
    }
    println!();
    println!("{} liked products", state.wishlist().count());
}

/// Like `id`, or unlike it when already liked.
pub async fn toggle(state: &AppState, id: ProductId) -> Result<(), Box<dyn std::error::Error>> {
    let product = state.catalog().product(id).await?;

    if state.wishlist().toggle(&product) {
        println!("liked {}", product.title);
    } else {
        println!("unliked {}", product.title);
    }
    Ok(())
}

/// Unlike a product.
pub fn remove(state: &AppState, id: ProductId) {
    state.wishlist().remove(id);
    println!("{} liked products", state.wishlist().count());
}

/// Empty the wishlist.
pub fn clear(state: &AppState) {
    state.wishlist().clear();
    println!("wishlist cleared");
}
