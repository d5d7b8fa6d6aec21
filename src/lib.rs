//! # hanabi-engine
//!
//! A rules engine for the cooperative card game Hanabi.
//!
//! ## Design Principles
//!
//! 1. **Pure Transitions**: `RulesEngine::perform` never mutates its input; it
//!    returns the successor state. History is a list of independent snapshots.
//!
//! 2. **Explicit Randomness**: One seeded `GameRng` is threaded through the deal
//!    and every controller decision. A seed reproduces a game exactly.
//!
//! 3. **Configuration Over Convention**: Seat count, hand size, limits and the
//!    card frequency table come from `HanabiConfig`, checked once at startup.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: Card states live in an `im::Vector`, so
//!   snapshots are O(1) to clone.
//!
//! - **Index-Stable Cards**: Every physical card keeps its deck index for the
//!   whole game; only its location and knowledge change.
//!
//! ## Modules
//!
//! - `core`: Cards, knowledge, players, state, actions, RNG, configuration, errors
//! - `rules`: `RulesEngine` trait and the standard `HanabiRules`
//! - `controllers`: Decision strategies for each seat
//! - `game`: Turn driver and history

pub mod core;
pub mod rules;
pub mod controllers;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, Card, CardState, Color, FrequencyTable, GameRng, GameState, HanabiConfig,
    HanabiError, Knowledge, Location, PlayerId, Rank,
};

pub use crate::rules::{EndReason, GameStatus, HanabiRules, RulesEngine};

pub use crate::controllers::{Controller, FirstLegalController, RandomController, ScriptedController};

pub use crate::game::{Game, GameHistory, GameSummary, HistoryEntry};
