use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::model::TARGET_SCORE;

/// Final summary shown when the countdown expires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    final_score: u32,
    target_score: u32,
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
}

impl GameSummary {
    /// Builds a summary for a finished session.
    ///
    /// If the clock moved backwards between start and completion the range is
    /// clamped to zero rather than rejected; nothing downstream depends on
    /// wall-clock accuracy.
    #[must_use]
    pub fn new(
        final_score: u32,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            final_score,
            target_score: TARGET_SCORE,
            started_at,
            completed_at: completed_at.max(started_at),
        }
    }

    #[must_use]
    pub fn final_score(&self) -> u32 {
        self.final_score
    }

    #[must_use]
    pub fn target_score(&self) -> u32 {
        self.target_score
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    /// Whether the player beat the challenge score.
    #[must_use]
    pub fn beat_target(&self) -> bool {
        self.final_score >= self.target_score
    }

    /// Wall-clock length of the session.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.completed_at - self.started_at
    }
}
