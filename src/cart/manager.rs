use std::sync::Arc;

use parking_lot::RwLock;
use time::OffsetDateTime;
use tokio::sync::broadcast;

use crate::catalog::{Catalog, ProductId};
use crate::store::SnapshotStore;
use crate::{CartOptions, Money};

use super::{Cart, CartEvent, CartLine, CartLineView, CartView, CheckoutError, Receipt};

/// Owns the session's cart and keeps its persisted snapshot in step with it.
///
/// Mutations apply to the in-memory cart, write the snapshot, then broadcast a
/// [`CartEvent`]. Persistence is best effort: a failed write is logged and the
/// in-memory cart stays authoritative.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use shinelix::{CartManager, CartOptions, ProductId, StaticCatalog};
/// use shinelix::store::MemoryStore;
///
/// let cart = CartManager::load(
///     Arc::new(MemoryStore::new()),
///     Arc::new(StaticCatalog::shinelix()),
///     CartOptions::default(),
/// );
///
/// cart.add(ProductId(1), 1);
/// cart.add(ProductId(1), 2);
/// assert_eq!(cart.item_count(), 3);
/// ```
#[derive(Debug)]
pub struct CartManager<S: SnapshotStore, C: Catalog> {
    cart: RwLock<Cart>,
    store: Arc<S>,
    catalog: Arc<C>,
    events: broadcast::Sender<CartEvent>,
    options: CartOptions,
}

impl<S, C> CartManager<S, C>
where
    S: SnapshotStore,
    C: Catalog,
{
    /// Rehydrates the cart from `store`.
    ///
    /// A missing or undecodable snapshot yields an empty cart.
    #[tracing::instrument(name = "loading cart from store", skip(store, catalog))]
    pub fn load(store: Arc<S>, catalog: Arc<C>, options: CartOptions) -> Self {
        let cart = match store.get(options.storage_key) {
            Ok(Some(snapshot)) => Cart::from_snapshot(&snapshot).unwrap_or_else(|err| {
                tracing::warn!(err = %err, "discarding unreadable cart snapshot");
                Cart::new()
            }),
            Ok(None) => Cart::new(),
            Err(err) => {
                tracing::warn!(err = %err, "failed to read cart snapshot");
                Cart::new()
            }
        };

        let (events, _) = broadcast::channel(options.channel_capacity);
        Self {
            cart: RwLock::new(cart),
            store,
            catalog,
            events,
            options,
        }
    }

    /// Subscribes to change notifications from this point on.
    pub fn subscribe(&self) -> broadcast::Receiver<CartEvent> {
        self.events.subscribe()
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Adds `quantity` of `product_id`, merging into an existing line.
    ///
    /// Unknown products are logged and ignored. Returns the line's new
    /// quantity, or `None` if nothing remains for the product.
    #[tracing::instrument(name = "adding product to cart", skip(self))]
    pub fn add(&self, product_id: ProductId, quantity: i64) -> Option<u32> {
        let Some(product) = self.catalog.get_by_id(product_id) else {
            tracing::error!("product not found");
            return None;
        };
        let name = product.name.clone();

        let updated = {
            let mut cart = self.cart.write();
            let had_line = cart.line(product_id).is_some();
            let updated = cart.add(product_id, quantity, OffsetDateTime::now_utc());
            if updated.is_none() && !had_line {
                tracing::debug!("nothing to add");
                return None;
            }
            self.persist(&cart);
            updated
        };

        match updated {
            Some(quantity) => self.notify(CartEvent::Added {
                product_id,
                name,
                quantity,
            }),
            None => self.notify(CartEvent::Removed { product_id }),
        }
        updated
    }

    /// Removes the line for `product_id`. Returns `true` if one existed.
    ///
    /// The snapshot is rewritten and subscribers notified either way.
    #[tracing::instrument(name = "removing product from cart", skip(self))]
    pub fn remove(&self, product_id: ProductId) -> bool {
        let removed = {
            let mut cart = self.cart.write();
            let removed = cart.remove(product_id);
            self.persist(&cart);
            removed
        };

        if !removed {
            tracing::debug!("no line to remove");
        }
        self.notify(CartEvent::Removed { product_id });
        removed
    }

    /// Overwrites an existing line's quantity; `quantity <= 0` removes the
    /// line. Products without a line are left alone.
    ///
    /// Returns `true` if the cart changed.
    #[tracing::instrument(name = "setting cart line quantity", skip(self))]
    pub fn set_quantity(&self, product_id: ProductId, quantity: i64) -> bool {
        if self.cart.read().line(product_id).is_none() {
            tracing::debug!("no line to update");
            return false;
        }
        if quantity <= 0 {
            return self.remove(product_id);
        }

        let (changed, current) = {
            let mut cart = self.cart.write();
            let changed = cart.set_quantity(product_id, quantity);
            self.persist(&cart);
            (changed, cart.line(product_id).map(|line| line.quantity))
        };

        if let Some(quantity) = current {
            self.notify(CartEvent::QuantityChanged {
                product_id,
                quantity,
            });
        }
        changed
    }

    #[tracing::instrument(name = "clearing cart", skip(self))]
    pub fn clear(&self) {
        {
            let mut cart = self.cart.write();
            cart.clear();
            self.persist(&cart);
        }
        self.notify(CartEvent::Cleared);
    }

    /// Price × quantity over every line whose product still resolves.
    pub fn total(&self) -> Money {
        self.cart.read().total(|id| self.price_of(id))
    }

    /// Sum of quantities, not the number of distinct lines.
    pub fn item_count(&self) -> u64 {
        self.cart.read().item_count()
    }

    pub fn is_empty(&self) -> bool {
        self.cart.read().is_empty()
    }

    /// A copy of the raw lines, including ones whose product no longer resolves.
    pub fn lines(&self) -> Vec<CartLine> {
        self.cart.read().lines().to_vec()
    }

    /// Resolves the cart against the catalog for rendering.
    pub fn view(&self) -> CartView {
        let cart = self.cart.read();
        let lines: Vec<CartLineView> = cart
            .lines()
            .iter()
            .filter_map(|line| {
                let product = self.catalog.get_by_id(line.product_id)?;
                Some(CartLineView {
                    product: product.clone(),
                    quantity: line.quantity,
                    subtotal: product.price.times(line.quantity),
                })
            })
            .collect();

        CartView {
            total: lines.iter().map(|line| line.subtotal).sum(),
            item_count: cart.item_count(),
            lines,
        }
    }

    /// What checking out now would produce, without clearing anything.
    pub fn checkout_summary(&self) -> Result<Receipt, CheckoutError> {
        let cart = self.cart.read();
        self.receipt(&cart)
    }

    /// Completes a simulated order: the cart is emptied and a
    /// [`CartEvent::CheckedOut`] is broadcast.
    ///
    /// An empty cart fails with [`CheckoutError::EmptyCart`] and is left as is.
    #[tracing::instrument(name = "checking out cart", skip(self))]
    pub fn checkout(&self) -> Result<Receipt, CheckoutError> {
        let receipt = {
            let mut cart = self.cart.write();
            let receipt = self.receipt(&cart).inspect_err(|err| {
                tracing::warn!(err = %err, "checkout rejected");
            })?;
            cart.clear();
            self.persist(&cart);
            receipt
        };

        tracing::info!(
            items = receipt.item_count,
            total = %receipt.total,
            "order placed"
        );
        self.notify(CartEvent::CheckedOut(receipt.clone()));
        Ok(receipt)
    }

    fn receipt(&self, cart: &Cart) -> Result<Receipt, CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        Ok(Receipt {
            lines: cart.lines().to_vec(),
            item_count: cart.item_count(),
            total: cart.total(|id| self.price_of(id)),
        })
    }

    fn price_of(&self, product_id: ProductId) -> Option<Money> {
        self.catalog.get_by_id(product_id).map(|product| product.price)
    }

    fn persist(&self, cart: &Cart) {
        let result = cart
            .to_snapshot()
            .and_then(|snapshot| self.store.set(self.options.storage_key, &snapshot));
        if let Err(err) = result {
            tracing::error!(err = %err, "failed to persist cart snapshot");
        }
    }

    fn notify(&self, event: CartEvent) {
        // Sending only fails when nobody is subscribed.
        let _ = self.events.send(event);
    }
}
