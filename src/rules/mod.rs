//! Rules engine: legality, transitions, enumeration and scoring.
//!
//! `RulesEngine` is the seam the turn driver and controllers program against.
//! `HanabiRules` is the implementation of the standard game.

mod engine;
mod hanabi;

pub use engine::{EndReason, GameStatus, RulesEngine};
pub use hanabi::HanabiRules;
