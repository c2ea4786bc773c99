//! # Shinelix: storefront state for a jewelry shop
//!
//! `shinelix` holds the state behind the Shinelix storefront: a read-only
//! product catalog, a shopping cart persisted to a key-value store, a
//! coalesced search-as-you-type, and the contact form with its autosaved
//! drafts. Rendering is left to the caller; everything here is queried
//! synchronously or observed through channels.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use shinelix::{CartEvent, CartManager, CartOptions, ProductId, StaticCatalog};
//! use shinelix::store::MemoryStore;
//!
//! let store = Arc::new(MemoryStore::new());
//! let catalog = Arc::new(StaticCatalog::shinelix());
//!
//! // Rehydrates from the store; an absent or corrupt snapshot starts empty.
//! let cart = CartManager::load(store, catalog, CartOptions::default());
//! let mut events = cart.subscribe();
//!
//! cart.add(ProductId(3), 2);
//! assert_eq!(cart.item_count(), 2);
//!
//! if let Ok(CartEvent::Added { name, .. }) = events.try_recv() {
//!     println!("{name} added to cart!");
//! }
//!
//! let receipt = cart.checkout().unwrap();
//! assert_eq!(receipt.item_count, 2);
//! assert!(cart.is_empty());
//! ```
//!
//! # Stores
//!
//! Persistence goes through [`store::SnapshotStore`], a string key-value
//! surface shaped like browser local storage.
//!
//! - [`store::MemoryStore`] keeps values for the life of the process.
//! - [`store::FileStore`] (feature `file-store`, on by default) keeps one file
//!   per key in a directory.
//!
//! The cart is stored under `shinelix-cart` as a JSON array of
//! `{ "productId", "quantity", "addedAt" }` objects.
//!
//! # Coalescing
//!
//! [`coalesce::Coalescer`] collapses bursts of triggers into one delayed
//! action. [`search::LiveSearch`] and [`contact::ContactDrafts`] use it; both
//! need a tokio runtime for their timers.

pub mod cart;
pub mod catalog;
pub mod coalesce;
pub mod contact;
pub mod search;
pub mod store;

mod money;
pub use money::Money;

mod options;
pub use options::*;

pub use cart::{Cart, CartEvent, CartLine, CartManager, CartView, CheckoutError, Receipt};
pub use catalog::{Catalog, Category, Product, ProductId, StaticCatalog};
