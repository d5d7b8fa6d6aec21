//! Controller implementations.
//!
//! A controller picks the active seat's action from the engine's legal set,
//! drawing any randomness from the game's shared `GameRng`.

use std::collections::VecDeque;

use crate::core::{Action, GameRng, GameState, HanabiError, Result};
use crate::rules::RulesEngine;

/// Decision strategy for one seat.
pub trait Controller<E: RulesEngine> {
    /// Choose an action for the active player of `state`.
    ///
    /// The result should be one of `engine.legal_actions(state)`; the turn
    /// driver rejects anything else.
    fn choose_action(&mut self, engine: &E, state: &GameState, rng: &mut GameRng) -> Result<Action>;

    /// Short label for logs.
    fn name(&self) -> &'static str;
}

/// Uniform random controller.
///
/// Draws from the game's shared RNG, so a seeded game replays exactly.
#[derive(Clone, Debug, Default)]
pub struct RandomController;

impl<E: RulesEngine> Controller<E> for RandomController {
    fn choose_action(&mut self, engine: &E, state: &GameState, rng: &mut GameRng) -> Result<Action> {
        let actions = engine.legal_actions(state);
        if actions.is_empty() {
            return Err(HanabiError::NoLegalActions);
        }
        let idx = rng.gen_range_usize(0..actions.len());
        Ok(actions[idx])
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

/// Always takes the first legal action.
#[derive(Clone, Debug, Default)]
pub struct FirstLegalController;

impl<E: RulesEngine> Controller<E> for FirstLegalController {
    fn choose_action(&mut self, engine: &E, state: &GameState, _rng: &mut GameRng) -> Result<Action> {
        engine
            .legal_actions(state)
            .first()
            .copied()
            .ok_or(HanabiError::NoLegalActions)
    }

    fn name(&self) -> &'static str {
        "first-legal"
    }
}

/// Plays back a fixed list of actions in order.
#[derive(Clone, Debug, Default)]
pub struct ScriptedController {
    script: VecDeque<Action>,
}

impl ScriptedController {
    #[must_use]
    pub fn new(script: impl IntoIterator<Item = Action>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    /// Actions not yet played.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl<E: RulesEngine> Controller<E> for ScriptedController {
    fn choose_action(&mut self, _engine: &E, _state: &GameState, _rng: &mut GameRng) -> Result<Action> {
        self.script
            .pop_front()
            .ok_or(HanabiError::ScriptExhausted)
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}
