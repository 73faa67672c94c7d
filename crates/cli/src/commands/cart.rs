//! Cart commands.
//!
//! Quantity clamping to stock happens here, not in the store - the store
//! trusts its caller, and capping at stock is front-end policy.

use bozor_core::ProductId;
use bozor_storefront::{AppState, format::format_sum};

/// Print cart entries plus the derived totals.
pub fn list(state: &AppState) {
    let cart = state.cart();
    let items = cart.items();

    if items.is_empty() {
        println!("cart is empty");
        return;
    }

    for entry in &items {
        println!(
            "#{:<5} {:<40} {:>3} x {:>12} = {:>12}",
            entry.id.get(),
            entry.title,
            entry.quantity,
            format_sum(entry.price),
            format_sum(entry.line_total())
        );
    }

    println!();
    println!("items:    {}", cart.count());
    println!("total:    {}", format_sum(cart.total()));
    let savings = cart.savings();
    if savings > rust_decimal::Decimal::ZERO {
        println!("was:      {}", format_sum(cart.original_total()));
        println!("you save: {}", format_sum(savings));
    }
}

/// Fetch `id` from the catalog and add it to the cart, capped at stock.
pub async fn add(
    state: &AppState,
    id: ProductId,
    quantity: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    let product = state.catalog().product(id).await?;

    let in_cart = state.cart().quantity(id);
    let room = product.stock.saturating_sub(in_cart);
    let capped = quantity.min(room);

    if capped == 0 {
        println!(
            "{}: only {} in stock, {} already in cart - nothing added",
            product.title, product.stock, in_cart
        );
        return Ok(());
    }

    state.cart().add(&product, capped);
    if capped < quantity {
        println!(
            "added {capped} x {} (requested {quantity}, capped at stock)",
            product.title
        );
    } else {
        println!("added {capped} x {}", product.title);
    }
    println!("cart now holds {} items", state.cart().count());
    Ok(())
}

/// Set the exact quantity of a cart entry; 0 removes it.
pub fn set_quantity(state: &AppState, id: ProductId, quantity: u32) {
    state.cart().set_quantity(id, quantity);
    println!("cart now holds {} items", state.cart().count());
}

/// Remove a cart entry.
pub fn remove(state: &AppState, id: ProductId) {
    state.cart().remove(id);
    println!("cart now holds {} items", state.cart().count());
}

/// Empty the cart.
pub fn clear(state: &AppState) {
    state.cart().clear();
    println!("cart cleared");
}
