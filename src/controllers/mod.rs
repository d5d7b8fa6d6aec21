//! Player controllers: who decides what the active seat does.
//!
//! Controllers are trait-based so seats can mix strategies:
//! - `RandomController`: uniform choice among legal actions
//! - `FirstLegalController`: always the first legal action (deterministic)
//! - `ScriptedController`: replays a fixed sequence of actions

mod policy;

pub use policy::{Controller, FirstLegalController, RandomController, ScriptedController};
