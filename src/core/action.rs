//! Action representation.
//!
//! An action is one of four moves. Play and discard name a card by its index
//! in `GameState::cards` (indices are stable for the whole game). Hints name a
//! target seat and exactly one property: a color or a rank, never both.

use serde::{Deserialize, Serialize};

use super::card::{Color, Rank};
use super::player::PlayerId;

/// A single move by the active player.
///
/// ```
/// use hanabi_engine::core::{Action, Color, PlayerId};
///
/// let play = Action::Play { card: 3 };
/// let hint = Action::HintColor { target: PlayerId::new(1), color: Color::new(0) };
///
/// assert!(!play.is_hint());
/// assert!(hint.is_hint());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Play a card from the active hand onto the fireworks.
    Play { card: usize },
    /// Discard a card from the active hand to regain a hint.
    Discard { card: usize },
    /// Tell `target` which of their cards are `color`.
    HintColor { target: PlayerId, color: Color },
    /// Tell `target` which of their cards are `rank`.
    HintRank { target: PlayerId, rank: Rank },
}

impl Action {
    /// Card index this action moves, if any.
    #[must_use]
    pub fn card(&self) -> Option<usize> {
        match self {
            Action::Play { card } | Action::Discard { card } => Some(*card),
            Action::HintColor { .. } | Action::HintRank { .. } => None,
        }
    }

    /// Hint target, if this is a hint.
    #[must_use]
    pub fn hint_target(&self) -> Option<PlayerId> {
        match self {
            Action::HintColor { target, .. } | Action::HintRank { target, .. } => Some(*target),
            Action::Play { .. } | Action::Discard { .. } => None,
        }
    }

    #[must_use]
    pub fn is_hint(&self) -> bool {
        self.hint_target().is_some()
    }

    /// Description that does not reveal card faces (what the card's owner sees).
    #[must_use]
    pub fn describe_hidden(&self) -> String {
        match self {
            Action::Play { card } => format!("playing card #{card}"),
            Action::Discard { card } => format!("discarding card #{card}"),
            Action::HintColor { target, color } => {
                format!("hinting {target} about all of the {color} cards")
            }
            Action::HintRank { target, rank } => {
                format!("hinting {target} about the {rank}s in hand")
            }
        }
    }
}

/// A recorded action with metadata for history tracking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Zero-based turn number of the game when the action was taken.
    pub turn: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, turn: u32) -> Self {
        Self { player, action, turn }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_accessor() {
        assert_eq!(Action::Play { card: 4 }.card(), Some(4));
        assert_eq!(Action::Discard { card: 9 }.card(), Some(9));
        let hint = Action::HintRank { target: PlayerId::new(1), rank: Rank::new(0) };
        assert_eq!(hint.card(), None);
        assert_eq!(hint.hint_target(), Some(PlayerId::new(1)));
    }

    #[test]
    fn test_describe_hidden() {
        assert_eq!(Action::Play { card: 2 }.describe_hidden(), "playing card #2");
        assert_eq!(Action::Discard { card: 7 }.describe_hidden(), "discarding card #7");

        let hint = Action::HintColor { target: PlayerId::new(1), color: Color::new(2) };
        assert_eq!(hint.describe_hidden(), "hinting Player 1 about all of the yellow cards");

        let hint = Action::HintRank { target: PlayerId::new(0), rank: Rank::new(4) };
        assert_eq!(hint.describe_hidden(), "hinting Player 0 about the 5s in hand");
    }

    #[test]
    fn test_action_hash() {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let hash = |a: &Action| {
            let mut h = DefaultHasher::new();
            a.hash(&mut h);
            h.finish()
        };

        let a1 = Action::Play { card: 5 };
        let a2 = Action::Play { card: 5 };
        let a3 = Action::Discard { card: 5 };

        assert_eq!(hash(&a1), hash(&a2));
        assert_ne!(hash(&a1), hash(&a3));
    }

    #[test]
    fn test_action_record_serialization() {
        let record = ActionRecord::new(
            PlayerId::new(1),
            Action::HintRank { target: PlayerId::new(0), rank: Rank::new(2) },
            7,
        );

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
