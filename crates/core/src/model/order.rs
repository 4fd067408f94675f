use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ItemKind;

/// Smallest quantity a picking order can ask for.
pub const MIN_ORDER_QUANTITY: u32 = 1;
/// Largest quantity a picking order can ask for.
pub const MAX_ORDER_QUANTITY: u32 = 3;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum OrderError {
    #[error("order quantity {quantity} outside {MIN_ORDER_QUANTITY}..={MAX_ORDER_QUANTITY}")]
    QuantityOutOfRange { quantity: u32 },
}

/// The current picking task: collect `quantity` cells holding `item`.
///
/// Invariant: `collected <= quantity` at all times. A fully collected order is
/// replaced by the session rather than reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    item: ItemKind,
    quantity: u32,
    collected: u32,
}

impl Order {
    /// Creates an order with nothing collected yet.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::QuantityOutOfRange` if `quantity` is outside
    /// `MIN_ORDER_QUANTITY..=MAX_ORDER_QUANTITY`.
    pub fn new(item: ItemKind, quantity: u32) -> Result<Self, OrderError> {
        if !(MIN_ORDER_QUANTITY..=MAX_ORDER_QUANTITY).contains(&quantity) {
            return Err(OrderError::QuantityOutOfRange { quantity });
        }
        Ok(Self::from_raw(item, quantity))
    }

    /// Infallible constructor for callers that already guarantee the range,
    /// i.e. the order generator.
    pub(crate) fn from_raw(item: ItemKind, quantity: u32) -> Self {
        debug_assert!((MIN_ORDER_QUANTITY..=MAX_ORDER_QUANTITY).contains(&quantity));
        Self {
            item,
            quantity,
            collected: 0,
        }
    }

    #[must_use]
    pub fn item(&self) -> ItemKind {
        self.item
    }

    #[must_use]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    #[must_use]
    pub fn collected(&self) -> u32 {
        self.collected
    }

    /// How many matching picks are still needed.
    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.quantity - self.collected
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.collected >= self.quantity
    }

    /// Records one matching pick. A no-op once the order is complete, so the
    /// `collected <= quantity` invariant holds no matter how often it is
    /// called.
    pub fn collect(&mut self) {
        if !self.is_complete() {
            self.collected += 1;
        }
    }
}
