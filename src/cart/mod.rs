//! Cart state: pure line bookkeeping plus the persisting, notifying manager.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::catalog::ProductId;
use crate::store::{self, deserialize_value, serialize_value};
use crate::Money;

mod event;
mod manager;

pub use event::{CartEvent, CartLineView, CartView, CheckoutError, Receipt};
pub use manager::CartManager;

/// One product-quantity pairing held by the cart.
///
/// Serializes as `{ "productId": 1, "quantity": 2, "addedAt": "<RFC 3339>" }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product_id: ProductId,
    pub quantity: u32,
    #[serde(with = "time::serde::rfc3339")]
    pub added_at: OffsetDateTime,
}

/// The cart's lines in insertion order, at most one per product.
///
/// Every transition here is pure bookkeeping; persistence and notification
/// belong to [`CartManager`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

fn clamp_quantity(quantity: i64) -> u32 {
    u32::try_from(quantity.max(0)).unwrap_or(u32::MAX)
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product_id == product_id)
    }

    fn position(&self, product_id: ProductId) -> Option<usize> {
        self.lines.iter().position(|line| line.product_id == product_id)
    }

    /// Adds `quantity` to the line for `product_id`, creating it at `now` if absent.
    ///
    /// A negative `quantity` decrements. Whenever the resulting quantity is not
    /// positive the line is dropped, so stored lines always hold at least one
    /// item. Returns the line's new quantity, or `None` if no line remains.
    pub fn add(&mut self, product_id: ProductId, quantity: i64, now: OffsetDateTime) -> Option<u32> {
        match self.position(product_id) {
            Some(index) => {
                let current = i64::from(self.lines[index].quantity);
                let next = clamp_quantity(current.saturating_add(quantity));
                if next == 0 {
                    self.lines.remove(index);
                    None
                } else {
                    self.lines[index].quantity = next;
                    Some(next)
                }
            }
            None => {
                let quantity = clamp_quantity(quantity);
                if quantity == 0 {
                    return None;
                }
                self.lines.push(CartLine {
                    product_id,
                    quantity,
                    added_at: now,
                });
                Some(quantity)
            }
        }
    }

    /// Removes the line for `product_id`. Returns `true` if one existed.
    pub fn remove(&mut self, product_id: ProductId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.product_id != product_id);
        self.lines.len() != before
    }

    /// Overwrites the quantity of an existing line.
    ///
    /// `quantity <= 0` removes the line. Products without a line are left
    /// alone. Returns `true` if the cart changed.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove(product_id);
        }
        match self.position(product_id) {
            Some(index) => {
                let quantity = clamp_quantity(quantity);
                let line = &mut self.lines[index];
                let changed = line.quantity != quantity;
                line.quantity = quantity;
                changed
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of quantities across all lines.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Sum of `price × quantity`; lines whose price does not resolve count as zero.
    pub fn total(&self, price_of: impl Fn(ProductId) -> Option<Money>) -> Money {
        self.lines
            .iter()
            .filter_map(|line| price_of(line.product_id).map(|price| price.times(line.quantity)))
            .sum()
    }

    /// Encodes the lines as a JSON array.
    pub fn to_snapshot(&self) -> Result<String, store::Error> {
        serialize_value(&self.lines)
    }

    /// Decodes a snapshot written by [`Cart::to_snapshot`].
    ///
    /// Zero-quantity entries are dropped and repeated product ids are merged
    /// into the first occurrence so the decoded cart keeps its invariants.
    pub fn from_snapshot(snapshot: &str) -> Result<Self, store::Error> {
        let decoded: Vec<CartLine> = deserialize_value(snapshot)?;
        let mut cart = Cart::new();
        for line in decoded {
            match cart.position(line.product_id) {
                Some(index) => {
                    let existing = &mut cart.lines[index];
                    existing.quantity = existing.quantity.saturating_add(line.quantity);
                }
                None if line.quantity > 0 => cart.lines.push(line),
                None => {}
            }
        }
        Ok(cart)
    }
}
