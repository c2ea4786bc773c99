use thiserror::Error;

use crate::catalog::{Product, ProductId};
use crate::Money;

use super::CartLine;

/// A change notification broadcast after every cart mutation.
///
/// Each event means "re-render": the badge, the sidebar and the total should
/// query the manager again. `Added` also carries what a confirmation toast
/// shows, and `CheckedOut` asks presentation to close the cart surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CartEvent {
    Added {
        product_id: ProductId,
        name: String,
        quantity: u32,
    },
    Removed {
        product_id: ProductId,
    },
    QuantityChanged {
        product_id: ProductId,
        quantity: u32,
    },
    Cleared,
    CheckedOut(Receipt),
}

/// A cart line resolved against the catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CartLineView {
    pub product: Product,
    pub quantity: u32,
    pub subtotal: Money,
}

/// Everything a cart sidebar renders, captured in one read.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CartView {
    /// Lines whose product resolves, in cart order.
    pub lines: Vec<CartLineView>,
    pub item_count: u64,
    pub total: Money,
}

impl CartView {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// What an order contained at the moment of checkout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Receipt {
    pub lines: Vec<CartLine>,
    pub item_count: u64,
    pub total: Money,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("Your cart is empty!")]
    EmptyCart,
}
