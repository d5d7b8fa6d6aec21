use thiserror::Error;

use super::action::Action;
use super::player::PlayerId;

/// Errors that can occur while configuring or running a game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HanabiError {
    /// The configuration is internally inconsistent.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An action was performed that its validity check rejects.
    #[error("Invalid action for {player}: {action:?}")]
    InvalidAction { action: Action, player: PlayerId },

    /// The engine reached a state its own rules forbid.
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    /// A controller was asked to choose with nothing to choose from.
    #[error("No legal actions available")]
    NoLegalActions,

    /// A scripted controller was asked for more actions than it holds.
    #[error("Scripted controller ran out of actions")]
    ScriptExhausted,

    /// The turn driver gave up after this many turns.
    #[error("Game exceeded {0} turns")]
    TurnLimitExceeded(usize),
}

impl HanabiError {
    /// True when the error points at a bug in the engine rather than at its caller.
    #[must_use]
    pub fn is_engine_bug(&self) -> bool {
        matches!(self, HanabiError::InvariantViolation(_))
    }
}

pub type Result<T> = std::result::Result<T, HanabiError>;
