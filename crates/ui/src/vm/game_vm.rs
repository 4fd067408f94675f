use chrono::{DateTime, Utc};

use pickpack_core::model::{Cell, CellId, GameState, GameSummary, Order, PickOutcome, TickOutcome};
use pickpack_core::rng::GameRng;
use pickpack_core::time::Clock;

/// What the game view can ask the view-model to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameIntent {
    Start,
    Tick,
    Pick(CellId),
}

/// Result of advancing the countdown by one second.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameTick {
    Continue,
    Finished(GameSummary),
}

/// Owns one game session on behalf of the view: the core state machine, its
/// randomness source, and the wall clock used for the final summary.
pub struct GameVm {
    state: GameState,
    rng: GameRng,
    clock: Clock,
    started_at: Option<DateTime<Utc>>,
}

impl GameVm {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self::with_clock(rng, Clock::default_clock())
    }

    #[must_use]
    pub fn with_clock(rng: GameRng, clock: Clock) -> Self {
        Self {
            state: GameState::new(),
            rng,
            clock,
            started_at: None,
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.state.score()
    }

    #[must_use]
    pub fn seconds_remaining(&self) -> u32 {
        self.state.seconds_remaining()
    }

    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        self.state.grid()
    }

    #[must_use]
    pub fn order(&self) -> Option<&Order> {
        self.state.order()
    }

    /// Begins (or restarts) a session.
    pub fn start(&mut self) {
        self.started_at = Some(self.clock.now());
        self.state.start(&mut self.rng);
    }

    /// Advances the countdown; on expiry, produces the final summary.
    pub fn tick(&mut self) -> GameTick {
        match self.state.tick() {
            TickOutcome::Expired => {
                let completed_at = self.clock.now();
                let started_at = self.started_at.unwrap_or(completed_at);
                GameTick::Finished(GameSummary::new(
                    self.state.score(),
                    started_at,
                    completed_at,
                ))
            }
            TickOutcome::Running | TickOutcome::Ignored => GameTick::Continue,
        }
    }

    /// Scores a click on the given cell.
    pub fn pick(&mut self, cell_id: CellId) -> PickOutcome {
        self.state.pick(cell_id, &mut self.rng)
    }
}
