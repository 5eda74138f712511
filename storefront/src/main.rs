//! Scripted walkthrough of the storefront state model.
//!
//! Drives the runtime store through a browse / cart / checkout / admin
//! session against a file-backed document store, then reopens the
//! documents to show that catalog and orders survived while the cart did
//! not. `RUST_LOG=debug` shows the dispatch and persistence tracing.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;
use vitrine_runtime::{FileStore, Store};
use vitrine_storefront::{
    CustomerInput, Intent, Notice, ProductDraft, StorefrontEnvironment, StorefrontReducer,
    persistence,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Vitrine Storefront Demo ===\n");

    let data_dir = std::env::temp_dir().join("vitrine-demo");
    let documents = Arc::new(FileStore::new(&data_dir));
    println!("documents under {}\n", data_dir.display());

    let state = persistence::load_state(documents.as_ref());
    let mut store = Store::new(
        state,
        StorefrontReducer,
        StorefrontEnvironment::system(),
        documents.clone(),
    );

    store.subscribe(|_state, notice| match notice {
        Notice::CartOpened => println!("  » cart drawer opens"),
        Notice::OrderPlaced { order_id } => {
            println!("  » Order Placed Successfully! Your Order ID is #{order_id}");
        }
        Notice::CheckoutRejected { reason } => println!("  » checkout rejected: {reason}"),
        Notice::ScrollTo { anchor } => match anchor {
            Some(anchor) => println!("  » scroll to #{anchor}"),
            None => println!("  » scroll to top"),
        },
    });

    println!("Catalog:");
    for product in store.state().catalog.products() {
        println!(
            "  [{}] {} — ${} ({})",
            product.id, product.name, product.price, product.category
        );
    }

    let (first, second) = {
        let products = store.state().catalog.products();
        (products[0].id.clone(), products[1].id.clone())
    };

    println!("\nBrowsing and filling the cart...");
    store.send(Intent::SelectProduct { id: first.clone() });
    store.send(Intent::AddToCart { product_id: first.clone() });
    store.send(Intent::AddToCart { product_id: second });
    println!(
        "  cart: {} lines, subtotal ${}",
        store.state().cart.len(),
        store.state().cart.subtotal()
    );

    println!("\nChecking out with a missing email...");
    store.send(Intent::BeginCheckout);
    store.send(Intent::SubmitOrder {
        customer: CustomerInput {
            first_name: "Ada".to_string(),
            ..CustomerInput::default()
        },
    });

    println!("\nChecking out for real...");
    store.send(Intent::SubmitOrder {
        customer: CustomerInput {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
        },
    });

    println!("\nAdmin: adding a product...");
    store.send(Intent::CreateProduct {
        draft: ProductDraft {
            name: "Slate Tray".to_string(),
            tagline: "A place for everything.".to_string(),
            description: "A valet tray in anodized aluminum.".to_string(),
            price: "39".to_string(),
            ..ProductDraft::default()
        },
    });
    println!("  catalog now holds {} products", store.state().catalog.len());

    println!("\nReopening from disk...");
    let reopened = persistence::load_state(documents.as_ref());
    println!(
        "  {} products, {} orders, cart empty: {}",
        reopened.catalog.len(),
        reopened.ledger.len(),
        reopened.cart.is_empty()
    );
    if let Some(order) = reopened.ledger.orders().first() {
        println!(
            "  latest order #{} — {} item(s), ${} ({})",
            order.id,
            order.items.len(),
            order.total,
            order.date
        );
    }

    println!("\n=== Demo Complete ===");
}
