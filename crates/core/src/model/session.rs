use serde::{Deserialize, Serialize};

use crate::generate::{generate_grid, generate_order};
use crate::model::{Cell, CellId, Order};
use crate::rng::GameRng;

/// Number of storage cells in the warehouse grid (4x4).
pub const GRID_CELLS: usize = 16;
/// Session length in seconds.
pub const GAME_DURATION_SECS: u32 = 60;
/// Points awarded for picking a cell that matches the current order.
pub const MATCH_POINTS: u32 = 10;
/// Points deducted for a mismatched pick. Deliberately smaller than the
/// reward, and the score never goes below zero.
pub const MISS_PENALTY: u32 = 5;
/// Score the player is challenged to beat within one session.
pub const TARGET_SCORE: u32 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Not started yet, or ended. Picks and ticks are ignored.
    Idle,
    /// Counting down; picks are scored.
    Running,
}

/// What a `tick` did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The session was not running; nothing changed.
    Ignored,
    /// One second elapsed, time remains.
    Running,
    /// The countdown reached zero and the session ended.
    Expired,
}

/// What a `pick` did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickOutcome {
    /// The session was not running or the cell id is unknown; nothing changed.
    Ignored,
    /// The cell matched the order; more picks are still needed.
    Collected,
    /// The cell matched and completed the order; a fresh order was issued.
    OrderCompleted,
    /// The cell did not match; the penalty was applied.
    Mismatch,
}

/// One play-through of the picking game.
///
/// All state lives in memory and is mutated only through `start`, `tick` and
/// `pick`; given the same `GameRng` seed and event sequence, the session is
/// fully deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    phase: GamePhase,
    score: u32,
    seconds_remaining: u32,
    grid: Vec<Cell>,
    order: Option<Order>,
}

impl GameState {
    /// A session that has not been started: empty grid, no order.
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: GamePhase::Idle,
            score: 0,
            seconds_remaining: GAME_DURATION_SECS,
            grid: Vec::new(),
            order: None,
        }
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    #[must_use]
    pub fn grid(&self) -> &[Cell] {
        &self.grid
    }

    #[must_use]
    pub fn order(&self) -> Option<&Order> {
        self.order.as_ref()
    }

    /// Begins a session: score 0, full timer, fresh grid and order.
    ///
    /// Also restarts an already running session, discarding its progress.
    pub fn start(&mut self, rng: &mut GameRng) {
        self.phase = GamePhase::Running;
        self.score = 0;
        self.seconds_remaining = GAME_DURATION_SECS;
        self.grid = generate_grid(rng);
        self.order = Some(generate_order(rng));
    }

    /// Advances the countdown by one second.
    ///
    /// Returns `TickOutcome::Expired` exactly once, on the tick that reaches
    /// zero; the session is idle from then on and further ticks are ignored.
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase != GamePhase::Running {
            return TickOutcome::Ignored;
        }

        self.seconds_remaining = self.seconds_remaining.saturating_sub(1);
        if self.seconds_remaining == 0 {
            self.phase = GamePhase::Idle;
            return TickOutcome::Expired;
        }
        TickOutcome::Running
    }

    /// Scores a click on the given cell.
    ///
    /// A match earns `MATCH_POINTS` and advances the current order, issuing a
    /// fresh one when it completes. A mismatch costs `MISS_PENALTY`, clamped
    /// at zero. Clicks while idle, or on an id not present in the grid, are
    /// ignored.
    pub fn pick(&mut self, cell_id: CellId, rng: &mut GameRng) -> PickOutcome {
        if self.phase != GamePhase::Running {
            return PickOutcome::Ignored;
        }
        let Some(order) = self.order.as_mut() else {
            return PickOutcome::Ignored;
        };
        let Some(cell) = self.grid.iter().find(|cell| cell.id() == cell_id) else {
            return PickOutcome::Ignored;
        };

        if cell.item() == order.item() {
            self.score += MATCH_POINTS;
            order.collect();
            if order.is_complete() {
                self.order = Some(generate_order(rng));
                return PickOutcome::OrderCompleted;
            }
            return PickOutcome::Collected;
        }

        self.score = self.score.saturating_sub(MISS_PENALTY);
        PickOutcome::Mismatch
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
