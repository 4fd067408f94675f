//! Random generation of warehouse grids and picking orders.
//!
//! Both generators are pure functions of the injected [`GameRng`]: the same
//! seed always yields the same grid and order sequence.

use crate::model::{Cell, CellId, Order, GRID_CELLS};
use crate::rng::GameRng;

/// Produces the 16-cell warehouse grid for a fresh session.
///
/// Labels are drawn uniformly with replacement, so duplicates are expected;
/// the gameplay depends on several cells sharing an item.
#[must_use]
pub fn generate_grid(rng: &mut GameRng) -> Vec<Cell> {
    (0..GRID_CELLS)
        .map(|index| Cell::new(CellId::new(index as u8), rng.item()))
        .collect()
}

/// Produces the next picking order: a uniform item and a uniform quantity in
/// 1..=3, with nothing collected yet.
#[must_use]
pub fn generate_order(rng: &mut GameRng) -> Order {
    Order::from_raw(rng.item(), rng.order_quantity())
}
