use std::sync::Arc;

use pickpack_core::rng::GameRng;

/// What the composition root (e.g. `crates/app`) provides to the UI.
pub trait UiApp: Send + Sync {
    fn app_name(&self) -> &str;

    /// Fixed seed for the game's randomness, if one was configured.
    /// `None` means every session draws a fresh layout.
    fn rng_seed(&self) -> Option<u64>;
}

#[derive(Clone)]
pub struct AppContext {
    app_name: String,
    rng_seed: Option<u64>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            app_name: app.app_name().to_string(),
            rng_seed: app.rng_seed(),
        }
    }

    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    #[must_use]
    pub fn rng_seed(&self) -> Option<u64> {
        self.rng_seed
    }

    /// Builds the randomness source for a game view: seeded when configured,
    /// otherwise OS-seeded.
    #[must_use]
    pub fn new_rng(&self) -> GameRng {
        match self.rng_seed {
            Some(seed) => GameRng::seeded(seed),
            None => GameRng::from_os(),
        }
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
