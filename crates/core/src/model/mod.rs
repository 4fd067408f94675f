mod cell;
mod ids;
mod item;
mod order;
mod session;
mod summary;

pub use cell::Cell;
pub use ids::{CellId, ParseIdError};
pub use item::ItemKind;
pub use order::{Order, OrderError, MAX_ORDER_QUANTITY, MIN_ORDER_QUANTITY};
pub use session::{
    GamePhase, GameState, PickOutcome, TickOutcome, GAME_DURATION_SECS, GRID_CELLS, MATCH_POINTS,
    MISS_PENALTY, TARGET_SCORE,
};
pub use summary::GameSummary;
