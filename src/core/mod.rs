//! Core engine types: cards, knowledge, players, state, actions, RNG, configuration.
//!
//! Everything here is plain data. The rules that move it live in `rules`.

pub mod card;
pub mod knowledge;
pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;
pub mod error;

pub use card::{Card, Color, Rank};
pub use knowledge::Knowledge;
pub use player::PlayerId;
pub use rng::GameRng;
pub use config::{FrequencyTable, HanabiConfig, STANDARD_RANK_COPIES};
pub use action::{Action, ActionRecord};
pub use state::{CardState, GameState, Location};
pub use error::{HanabiError, Result};
