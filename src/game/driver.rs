//! Turn driver: asks controllers for actions and applies them until the game ends.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::controllers::{Controller, RandomController};
use crate::core::{ActionRecord, GameRng, GameState, HanabiError, Result};
use crate::rules::{EndReason, GameStatus, HanabiRules, RulesEngine};

use super::history::GameHistory;

/// Outcome of a finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    /// Seed the game was dealt and played with.
    pub seed: u64,
    pub score: u32,
    pub max_score: u32,
    /// Actions taken.
    pub turns: usize,
    pub end_reason: EndReason,
    pub mistakes: u32,
    pub hints_available: u32,
}

/// A single game: rules, one controller per seat, the shared RNG and history.
pub struct Game<E: RulesEngine = HanabiRules> {
    engine: E,
    controllers: Vec<Box<dyn Controller<E>>>,
    rng: GameRng,
    history: GameHistory,
    max_turns: usize,
}

impl<E: RulesEngine> Game<E> {
    /// Deal a game from `seed` with one controller per seat (seat 0 first).
    pub fn new(engine: E, controllers: Vec<Box<dyn Controller<E>>>, seed: u64) -> Result<Self> {
        let config = engine.config();
        if controllers.len() != config.num_players {
            return Err(HanabiError::Config(format!(
                "{} controllers for {} players",
                controllers.len(),
                config.num_players
            )));
        }

        // Every turn either uses a hint or consumes a card; hints only come
        // back from cards, so the game is bounded by the deck.
        let max_turns = config.deck_size * 4 + config.starting_num_hints as usize + config.num_players;

        let mut rng = GameRng::new(seed);
        let initial = engine.initialize(&mut rng)?;

        Ok(Self {
            engine,
            controllers,
            rng,
            history: GameHistory::new(initial),
            max_turns,
        })
    }

    /// Override the safety bound on the number of turns.
    #[must_use]
    pub fn with_max_turns(mut self, max_turns: usize) -> Self {
        self.max_turns = max_turns;
        self
    }

    #[must_use]
    pub fn engine(&self) -> &E {
        &self.engine
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// The latest state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        self.history.current()
    }

    #[must_use]
    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.engine.status(self.state())
    }

    /// Play one turn. Does nothing once the game is over.
    pub fn step(&mut self) -> Result<GameStatus> {
        let state = self.history.current().clone();
        let status = self.engine.status(&state);
        if status.is_over() {
            return Ok(status);
        }

        let turn = self.history.turns();
        if turn >= self.max_turns {
            return Err(HanabiError::TurnLimitExceeded(self.max_turns));
        }

        let actor = state.player_turn;
        let controller = self.controllers.get_mut(actor.index()).ok_or_else(|| {
            HanabiError::InvariantViolation(format!("no controller seated for {actor}"))
        })?;

        let action = controller.choose_action(&self.engine, &state, &mut self.rng)?;
        if !self.engine.validate(&state, &action) {
            warn!(player = actor.0, controller = controller.name(), ?action, "Controller chose an illegal action");
            return Err(HanabiError::InvalidAction { action, player: actor });
        }

        debug!(
            turn,
            player = actor.0,
            hints = state.hints_available,
            mistakes = state.mistakes,
            "{}",
            self.engine.describe(&state, &action)
        );

        let next = self.engine.perform(&state, &action)?;
        self.history.push(ActionRecord::new(actor, action, turn as u32), next);

        Ok(self.status())
    }

    /// Play until the game ends and report the result.
    pub fn run(&mut self) -> Result<GameSummary> {
        let end_reason = loop {
            if let GameStatus::Ended(reason) = self.step()? {
                break reason;
            }
        };

        let final_state = self.state();
        let summary = GameSummary {
            seed: self.seed(),
            score: self.engine.score(final_state),
            max_score: self.engine.config().max_score(),
            turns: self.history.turns(),
            end_reason,
            mistakes: final_state.mistakes,
            hints_available: final_state.hints_available,
        };

        info!(
            seed = summary.seed,
            score = summary.score,
            turns = summary.turns,
            reason = ?summary.end_reason,
            "Game over"
        );

        Ok(summary)
    }

    /// Replay the recorded actions from the deal and return the final state.
    pub fn replay(&self) -> Result<GameState> {
        self.history.replay(&self.engine)
    }
}

impl<E: RulesEngine + 'static> Game<E> {
    /// A game where every seat plays uniformly at random.
    pub fn random(engine: E, seed: u64) -> Result<Self> {
        let controllers = (0..engine.config().num_players)
            .map(|_| Box::new(RandomController) as Box<dyn Controller<E>>)
            .collect();
        Self::new(engine, controllers, seed)
    }
}
