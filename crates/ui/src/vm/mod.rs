mod game_vm;
mod time_fmt;

pub use game_vm::{GameIntent, GameTick, GameVm};
pub use time_fmt::format_seconds;
