//! Rules engine trait.
//!
//! A rules engine defines:
//! - How the starting state is dealt
//! - Which actions are legal
//! - How actions transform state
//! - When the game is over and what it scored

use serde::{Deserialize, Serialize};

use crate::core::action::Action;
use crate::core::config::HanabiConfig;
use crate::core::error::Result;
use crate::core::rng::GameRng;
use crate::core::state::{GameState, Location};

/// Why a game stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// The mistake limit was reached.
    TooManyMistakes,
    /// The seat that drew the last card finished its turn.
    FinalRoundComplete,
    /// The active player has nothing to do. Unreachable under standard rules,
    /// since a non-empty hand can always play or discard.
    NoLegalActions,
}

/// Turn driver state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Ended(EndReason),
}

impl GameStatus {
    #[must_use]
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Ended(_))
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `perform` must be pure: it returns a new state and leaves its input alone
/// - `perform` must reject anything `validate` rejects
/// - `legal_actions` must be deterministic in order, so seeded games replay exactly
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &HanabiConfig;

    /// Build, shuffle and deal a fresh deck.
    fn initialize(&self, rng: &mut GameRng) -> Result<GameState>;

    /// Whether `action` may be taken by the active player in `state`.
    fn validate(&self, state: &GameState, action: &Action) -> bool;

    /// Apply `action`, returning the successor state.
    fn perform(&self, state: &GameState, action: &Action) -> Result<GameState>;

    /// Every legal action for the active player.
    fn legal_actions(&self, state: &GameState) -> Vec<Action>;

    /// Score of a (usually final) state.
    fn score(&self, state: &GameState) -> u32;

    /// Human-readable description of `action` about to be applied to `state`.
    fn describe(&self, _state: &GameState, action: &Action) -> String {
        action.describe_hidden()
    }

    // === Convenience Methods ===

    /// Whether the game continues from `state`.
    fn status(&self, state: &GameState) -> GameStatus {
        if state.mistakes >= self.config().max_num_mistakes {
            GameStatus::Ended(EndReason::TooManyMistakes)
        } else if state.last_player_has_played {
            GameStatus::Ended(EndReason::FinalRoundComplete)
        } else if state.count_at(Location::Hand(state.player_turn)) == 0 {
            GameStatus::Ended(EndReason::NoLegalActions)
        } else {
            GameStatus::InProgress
        }
    }

    /// `Some(score)` once the game is over.
    fn final_score(&self, state: &GameState) -> Option<u32> {
        self.status(state).is_over().then(|| self.score(state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_is_over() {
        assert!(!GameStatus::InProgress.is_over());
        assert!(GameStatus::Ended(EndReason::TooManyMistakes).is_over());
        assert!(GameStatus::Ended(EndReason::FinalRoundComplete).is_over());
    }
}
