//! Game loop: controllers, the turn driver and the history it records.

mod driver;
mod history;

pub use driver::{Game, GameSummary};
pub use history::{GameHistory, HistoryEntry};
