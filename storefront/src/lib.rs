//! # Vitrine Storefront
//!
//! A client-resident storefront with no backend: product catalog, cart,
//! simulated checkout, and an admin surface for editing the catalog and
//! reviewing orders.
//!
//! The engineering core is the application state model: [`StorefrontState`]
//! is the single in-memory source of truth for catalog, cart, orders, and
//! navigation. Every user action is an [`Intent`] reduced by
//! [`StorefrontReducer`]; durable collections are resynchronized to a
//! [`DocumentStore`](vitrine_core::storage::DocumentStore) after every
//! successful mutation, and user-visible output is emitted as [`Notice`]
//! events. The presentation layer is out of scope here: it subscribes to
//! the runtime store, renders from the state, and raises intents back in.
//!
//! ## Quick start
//!
//! ```
//! use std::sync::Arc;
//! use vitrine_runtime::Store;
//! use vitrine_storefront::{Intent, StorefrontEnvironment, StorefrontReducer, persistence};
//! use vitrine_testing::MemoryStore;
//!
//! let documents = Arc::new(MemoryStore::new());
//! let state = persistence::load_state(documents.as_ref());
//! let mut store = Store::new(
//!     state,
//!     StorefrontReducer,
//!     StorefrontEnvironment::system(),
//!     documents,
//! );
//!
//! let first = store.state().catalog.products()[0].id.clone();
//! store.send(Intent::AddToCart { product_id: first });
//! assert_eq!(store.state().cart.len(), 1);
//! ```

pub mod persistence;
pub mod reducer;
pub mod seed;
pub mod state;
pub mod types;

pub use reducer::{StorefrontEnvironment, StorefrontReducer};
pub use state::{Cart, Catalog, Ledger, StorefrontState};
pub use types::{
    Article, Category, Customer, CustomerInput, Intent, Notice, Order, OrderStatus, Product,
    ProductDraft, View,
};
