//! Loading and encoding the two durable documents.
//!
//! The catalog and the order ledger each live under their own key as a
//! JSON array, rewritten wholesale on every mutation. Loading is silently
//! recovering: an absent or unparseable catalog document falls back to the
//! built-in seed, an absent or unparseable order document falls back to an
//! empty ledger. Neither case is surfaced as an error; the storefront
//! must always come up interactive.

use vitrine_core::storage::DocumentStore;

use crate::seed;
use crate::state::StorefrontState;
use crate::types::{Order, Product};

/// Document key holding the catalog product array.
pub const CATALOG_KEY: &str = "vitrine_products";

/// Document key holding the order array, most recent first.
pub const ORDERS_KEY: &str = "vitrine_orders";

/// Serialize the catalog document.
#[must_use]
pub fn encode_catalog(products: &[Product]) -> String {
    encode(CATALOG_KEY, products)
}

/// Serialize the order document.
#[must_use]
pub fn encode_orders(orders: &[Order]) -> String {
    encode(ORDERS_KEY, orders)
}

fn encode<T: serde::Serialize>(key: &str, collection: &[T]) -> String {
    serde_json::to_string(collection).unwrap_or_else(|error| {
        // Unreachable with these types; an empty array keeps the document
        // parseable rather than wedging the store with a partial write.
        tracing::warn!(key, %error, "document serialization failed");
        "[]".to_string()
    })
}

/// Load the catalog, falling back to the seed catalog on absence or
/// malformed contents.
#[must_use]
pub fn load_catalog(documents: &dyn DocumentStore) -> Vec<Product> {
    match read_collection(documents, CATALOG_KEY) {
        Some(products) => products,
        None => {
            tracing::info!("catalog document unavailable; seeding defaults");
            seed::default_catalog()
        }
    }
}

/// Load the order ledger, falling back to empty on absence or malformed
/// contents.
#[must_use]
pub fn load_orders(documents: &dyn DocumentStore) -> Vec<Order> {
    match read_collection(documents, ORDERS_KEY) {
        Some(orders) => orders,
        None => Vec::new(),
    }
}

/// Assemble the full startup state from durable storage. Runs once per
/// process lifetime, before any render. The cart always starts empty.
#[must_use]
pub fn load_state(documents: &dyn DocumentStore) -> StorefrontState {
    StorefrontState::new(
        load_catalog(documents),
        load_orders(documents),
        seed::default_articles(),
    )
}

fn read_collection<T: serde::de::DeserializeOwned>(
    documents: &dyn DocumentStore,
    key: &str,
) -> Option<Vec<T>> {
    let contents = match documents.read(key) {
        Ok(contents) => contents?,
        Err(error) => {
            tracing::warn!(key, %error, "document unreadable; recovering with defaults");
            return None;
        }
    };
    match serde_json::from_str(&contents) {
        Ok(collection) => Some(collection),
        Err(error) => {
            tracing::warn!(key, %error, "document malformed; recovering with defaults");
            None
        }
    }
}
