use serde::{Deserialize, Serialize};

use crate::games::hangman::round::RoundResult;

/// Points awarded for a won round.
pub const DEFAULT_WIN_AWARD: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringRules {
    pub win_award: u32,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            win_award: DEFAULT_WIN_AWARD,
        }
    }
}

/// Cumulative counters across rounds, kept by the caller of the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerTally {
    pub score: u32,
    pub games_played: u32,
    pub games_won: u32,
}

impl PlayerTally {
    /// Folds a finished round in and returns the points it earned.
    pub fn record(&mut self, result: RoundResult, rules: &ScoringRules) -> u32 {
        self.games_played += 1;
        match result {
            RoundResult::Won => {
                self.games_won += 1;
                self.score += rules.win_award;
                rules.win_award
            }
            RoundResult::Lost => 0,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
