use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::model::{ItemKind, MAX_ORDER_QUANTITY, MIN_ORDER_QUANTITY};

/// Randomness source for grid and order generation.
///
/// Wraps a seedable generator so the generators are deterministic under test
/// and reproducible from a CLI-provided seed.
#[derive(Debug, Clone)]
pub struct GameRng(StdRng);

impl GameRng {
    /// Returns a generator seeded from the operating system.
    #[must_use]
    pub fn from_os() -> Self {
        Self(StdRng::from_os_rng())
    }

    /// Returns a generator with a fixed seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    /// Draws one item kind uniformly from the fixed set.
    pub fn item(&mut self) -> ItemKind {
        let index = self.0.random_range(0..ItemKind::ALL.len());
        ItemKind::ALL[index]
    }

    /// Draws an order quantity uniformly from the allowed range.
    pub fn order_quantity(&mut self) -> u32 {
        self.0.random_range(MIN_ORDER_QUANTITY..=MAX_ORDER_QUANTITY)
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::from_os()
    }
}
