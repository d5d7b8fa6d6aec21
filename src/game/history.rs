//! Append-only record of every state a game passed through.

use serde::{Deserialize, Serialize};

use crate::core::{ActionRecord, GameState, HanabiError, Result};
use crate::rules::RulesEngine;

/// One snapshot and the action that produced it (`None` for the deal).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub state: GameState,
    pub action: Option<ActionRecord>,
}

/// Every state of a game in order, starting from the deal.
///
/// Entries are independent snapshots, so any earlier position can be
/// inspected or replayed without touching later ones.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameHistory {
    entries: Vec<HistoryEntry>,
}

impl GameHistory {
    /// Start a history at the dealt state.
    #[must_use]
    pub fn new(initial: GameState) -> Self {
        Self {
            entries: vec![HistoryEntry { state: initial, action: None }],
        }
    }

    /// Record the state reached by `record`.
    pub fn push(&mut self, record: ActionRecord, state: GameState) {
        self.entries.push(HistoryEntry {
            state,
            action: Some(record),
        });
    }

    #[must_use]
    pub fn initial(&self) -> &GameState {
        &self.entries[0].state
    }

    #[must_use]
    pub fn current(&self) -> &GameState {
        &self.entries[self.entries.len() - 1].state
    }

    /// Number of actions taken so far.
    #[must_use]
    pub fn turns(&self) -> usize {
        self.entries.len() - 1
    }

    /// The state after `turn` actions (0 = the deal).
    #[must_use]
    pub fn state_at(&self, turn: usize) -> Option<&GameState> {
        self.entries.get(turn).map(|entry| &entry.state)
    }

    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Actions taken, in order.
    pub fn actions(&self) -> impl Iterator<Item = &ActionRecord> + '_ {
        self.entries.iter().filter_map(|entry| entry.action.as_ref())
    }

    /// Re-apply every recorded action to the initial state.
    ///
    /// Fails if a replayed step diverges from the recorded snapshot.
    pub fn replay<E: RulesEngine>(&self, engine: &E) -> Result<GameState> {
        let mut state = self.initial().clone();
        for (turn, entry) in self.entries.iter().enumerate().skip(1) {
            let Some(record) = entry.action else {
                continue;
            };
            state = engine.perform(&state, &record.action)?;
            if state != entry.state {
                return Err(HanabiError::InvariantViolation(format!(
                    "replay diverged from recorded history at turn {turn}"
                )));
            }
        }
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Action, GameRng, HanabiConfig, PlayerId};
    use crate::rules::HanabiRules;

    fn setup() -> (HanabiRules, GameHistory) {
        let rules = HanabiRules::new(HanabiConfig::default()).unwrap();
        let initial = rules.initialize(&mut GameRng::new(8)).unwrap();
        (rules, GameHistory::new(initial))
    }

    #[test]
    fn test_new_history() {
        let (_, history) = setup();
        assert_eq!(history.turns(), 0);
        assert_eq!(history.initial(), history.current());
        assert_eq!(history.actions().count(), 0);
        assert!(history.entries()[0].action.is_none());
    }

    #[test]
    fn test_push_and_replay() {
        let (rules, mut history) = setup();

        let actions = [Action::Discard { card: 0 }, Action::Discard { card: 5 }, Action::Play { card: 1 }];
        for (turn, action) in actions.iter().enumerate() {
            let state = history.current().clone();
            let next = rules.perform(&state, action).unwrap();
            history.push(ActionRecord::new(state.player_turn, *action, turn as u32), next);
        }

        assert_eq!(history.turns(), 3);
        assert_eq!(history.actions().count(), 3);
        assert_eq!(history.state_at(1).unwrap().player_turn, PlayerId::new(1));
        assert!(history.state_at(4).is_none());

        let replayed = history.replay(&rules).unwrap();
        assert_eq!(&replayed, history.current());
    }

    #[test]
    fn test_replay_detects_tampering() {
        let (rules, mut history) = setup();
        let state = history.current().clone();
        let mut next = rules.perform(&state, &Action::Discard { card: 0 }).unwrap();
        next.mistakes = 2;
        history.push(ActionRecord::new(PlayerId::new(0), Action::Discard { card: 0 }, 0), next);

        let err = history.replay(&rules).unwrap_err();
        assert!(err.is_engine_bug());
    }
}
