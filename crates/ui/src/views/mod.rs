mod game;
mod home;

#[cfg(test)]
mod view_smoke;

pub use game::GameView;
pub use home::HomeView;
