//! Game state: every card's location and knowledge, plus the shared counters.
//!
//! ## Card indices
//!
//! `GameState::cards` has one entry per physical card, in post-shuffle deck
//! order. Indices never change during a game; actions refer to cards by index
//! and only the `location` and `knowledge` of an entry ever move.
//!
//! ## Snapshots
//!
//! Cards live in an `im::Vector`, so cloning a state is O(1) and a transition
//! only copies the chunks it touches. The turn driver keeps every state it
//! has seen without paying for full deck copies.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::card::{Card, Color, Rank};
use super::knowledge::Knowledge;
use super::player::PlayerId;

/// Where a card currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    /// Face down, waiting to be drawn.
    DrawPile,
    /// Held by a player.
    Hand(PlayerId),
    /// Discarded, or played as a mistake.
    Discard,
    /// Successfully played onto the fireworks.
    InPlay,
}

/// One physical card and what is known about it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardState {
    pub card: Card,
    pub location: Location,
    pub knowledge: Knowledge,
    /// Draw order for cards that started in the draw pile (1 = next to draw).
    /// Zero for cards dealt into starting hands.
    pub age: u32,
}

/// Complete game state.
///
/// Transitions never edit a state in place: `HanabiRules::perform` clones
/// its input and returns the successor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    cards: Vector<CardState>,

    /// Seat whose turn it is.
    pub player_turn: PlayerId,

    /// Hint tokens left.
    pub hints_available: u32,

    /// Mistakes made so far.
    pub mistakes: u32,

    /// Index of the next card to draw; `None` once the draw pile is empty.
    pub next_draw_index: Option<usize>,

    /// Seat that drew the last card. Set once the draw pile runs out.
    pub last_player_to_play: Option<PlayerId>,

    /// The seat that drew the last card has finished its turn.
    pub last_player_has_played: bool,
}

impl GameState {
    /// Assemble a state from already-placed cards.
    ///
    /// The turn starts at player 0 with no mistakes and no end-game countdown.
    #[must_use]
    pub fn new(cards: Vec<CardState>, hints_available: u32, next_draw_index: Option<usize>) -> Self {
        Self {
            cards: Vector::from(cards),
            player_turn: PlayerId::new(0),
            hints_available,
            mistakes: 0,
            next_draw_index,
            last_player_to_play: None,
            last_player_has_played: false,
        }
    }

    /// All cards, indexed by card index.
    #[must_use]
    pub fn cards(&self) -> &Vector<CardState> {
        &self.cards
    }

    /// A single card by index.
    #[must_use]
    pub fn card(&self, index: usize) -> Option<&CardState> {
        self.cards.get(index)
    }

    /// Number of cards in the game.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.cards.len()
    }

    /// Cards at `location` with their indices, ascending.
    pub fn cards_at(&self, location: Location) -> impl Iterator<Item = (usize, &CardState)> + '_ {
        self.cards
            .iter()
            .enumerate()
            .filter(move |(_, state)| state.location == location)
    }

    /// Number of cards at `location`.
    #[must_use]
    pub fn count_at(&self, location: Location) -> usize {
        self.cards_at(location).count()
    }

    /// Card indices in `player`'s hand, ascending.
    #[must_use]
    pub fn hand(&self, player: PlayerId) -> Vec<usize> {
        self.cards_at(Location::Hand(player)).map(|(i, _)| i).collect()
    }

    #[must_use]
    pub fn draw_pile_size(&self) -> usize {
        self.count_at(Location::DrawPile)
    }

    /// Highest rank of `color` currently in play.
    #[must_use]
    pub fn highest_in_play(&self, color: Color) -> Option<Rank> {
        self.cards_at(Location::InPlay)
            .filter(|(_, state)| state.card.color == color)
            .map(|(_, state)| state.card.rank)
            .max()
    }

    pub(crate) fn set_location(&mut self, index: usize, location: Location) {
        if let Some(state) = self.cards.get_mut(index) {
            state.location = location;
        }
    }

    pub(crate) fn knowledge_mut(&mut self, index: usize) -> Option<&mut Knowledge> {
        self.cards.get_mut(index).map(|state| &mut state.knowledge)
    }
}
