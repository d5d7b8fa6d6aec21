//! Game configuration.
//!
//! A `HanabiConfig` fixes the structure of one game: seat count, hand size,
//! hint and mistake limits, the color/rank dimensions and how many copies of
//! each card face make up the deck. It is built once and never mutated
//! mid-game.

use serde::{Deserialize, Serialize};

use super::card::{Card, Color, Rank};
use super::error::{HanabiError, Result};

/// Copies of each rank in the classic deck, lowest rank first.
pub const STANDARD_RANK_COPIES: [u8; 5] = [3, 2, 2, 2, 1];

/// How many copies of every color × rank combination the deck holds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyTable {
    num_colors: usize,
    num_ranks: usize,
    /// Color-major: `counts[color * num_ranks + rank]`.
    counts: Vec<u8>,
}

impl FrequencyTable {
    /// Table where every color uses the same per-rank copy counts.
    #[must_use]
    pub fn uniform(num_colors: usize, rank_copies: &[u8]) -> Self {
        let counts = (0..num_colors).flat_map(|_| rank_copies.iter().copied()).collect();
        Self {
            num_colors,
            num_ranks: rank_copies.len(),
            counts,
        }
    }

    /// Table from explicit rows, one per color.
    ///
    /// Rows of unequal length are rejected.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self> {
        let num_ranks = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != num_ranks) {
            return Err(HanabiError::Config(
                "frequency table rows must all have the same number of ranks".to_string(),
            ));
        }
        Ok(Self {
            num_colors: rows.len(),
            num_ranks,
            counts: rows.iter().flatten().copied().collect(),
        })
    }

    #[must_use]
    pub fn num_colors(&self) -> usize {
        self.num_colors
    }

    #[must_use]
    pub fn num_ranks(&self) -> usize {
        self.num_ranks
    }

    /// Copies of a single card face.
    #[must_use]
    pub fn copies(&self, color: Color, rank: Rank) -> u8 {
        if color.index() >= self.num_colors || rank.index() >= self.num_ranks {
            return 0;
        }
        self.counts[color.index() * self.num_ranks + rank.index()]
    }

    /// Total number of cards the table describes.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().map(|&c| c as usize).sum()
    }

    /// The unshuffled deck: color-major, then rank, repeated per copy.
    #[must_use]
    pub fn build_deck(&self) -> Vec<Card> {
        let mut deck = Vec::with_capacity(self.total());
        for color in Color::all(self.num_colors) {
            for rank in Rank::all(self.num_ranks) {
                for _ in 0..self.copies(color, rank) {
                    deck.push(Card::new(color, rank));
                }
            }
        }
        deck
    }

    /// Check that `deck` holds exactly the cards this table describes, in any order.
    pub fn check_deck(&self, deck: &[Card]) -> Result<()> {
        let mut seen = vec![0usize; self.counts.len()];
        for card in deck {
            let slot = (card.color.index() < self.num_colors && card.rank.index() < self.num_ranks)
                .then(|| card.color.index() * self.num_ranks + card.rank.index())
                .and_then(|i| seen.get_mut(i));
            match slot {
                Some(count) => *count += 1,
                None => {
                    return Err(HanabiError::Config(format!(
                        "deck holds {card}, outside the {} colors and {} ranks configured",
                        self.num_colors, self.num_ranks
                    )));
                }
            }
        }

        for color in Color::all(self.num_colors) {
            for rank in Rank::all(self.num_ranks) {
                let held = seen.get(color.index() * self.num_ranks + rank.index()).copied().unwrap_or(0);
                let expected = self.copies(color, rank) as usize;
                if held != expected {
                    return Err(HanabiError::Config(format!(
                        "deck holds {held} copies of {} but the frequency table expects {expected}",
                        Card::new(color, rank)
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HanabiConfig {
    /// Number of seats (2-255).
    pub num_players: usize,

    /// Cards dealt to each seat.
    pub hand_size: usize,

    /// Hint tokens cap.
    pub max_num_hints: u32,

    /// Hint tokens at the start of the game.
    pub starting_num_hints: u32,

    /// Mistakes that end the game.
    pub max_num_mistakes: u32,

    pub num_colors: usize,
    pub num_ranks: usize,

    /// Copies of every card face.
    pub frequencies: FrequencyTable,

    /// Declared deck size. Must equal `frequencies.total()`.
    pub deck_size: usize,
}

impl Default for HanabiConfig {
    fn default() -> Self {
        Self::standard(2)
    }
}

impl HanabiConfig {
    /// The classic five-color game for `num_players` seats.
    ///
    /// Hand size is 5 for two or three players and 4 for larger tables.
    #[must_use]
    pub fn standard(num_players: usize) -> Self {
        let frequencies = FrequencyTable::uniform(5, &STANDARD_RANK_COPIES);
        Self {
            num_players,
            hand_size: if num_players <= 3 { 5 } else { 4 },
            max_num_hints: 8,
            starting_num_hints: 8,
            max_num_mistakes: 3,
            num_colors: 5,
            num_ranks: 5,
            deck_size: frequencies.total(),
            frequencies,
        }
    }

    /// Set the number of players.
    #[must_use]
    pub fn with_players(mut self, num_players: usize) -> Self {
        self.num_players = num_players;
        self
    }

    /// Set the hand size.
    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Set the hint cap and starting hints together.
    #[must_use]
    pub fn with_hints(mut self, max: u32, starting: u32) -> Self {
        self.max_num_hints = max;
        self.starting_num_hints = starting;
        self
    }

    /// Set the mistake limit.
    #[must_use]
    pub fn with_max_mistakes(mut self, max: u32) -> Self {
        self.max_num_mistakes = max;
        self
    }

    /// Replace the card frequencies. Dimensions and deck size follow the table.
    #[must_use]
    pub fn with_frequencies(mut self, frequencies: FrequencyTable) -> Self {
        self.num_colors = frequencies.num_colors();
        self.num_ranks = frequencies.num_ranks();
        self.deck_size = frequencies.total();
        self.frequencies = frequencies;
        self
    }

    /// Override the declared deck size (checked by `validate`).
    #[must_use]
    pub fn with_deck_size(mut self, deck_size: usize) -> Self {
        self.deck_size = deck_size;
        self
    }

    /// Highest rank; playing it grants a hint back.
    #[must_use]
    pub fn top_rank(&self) -> Rank {
        Rank(self.num_ranks.saturating_sub(1) as u8)
    }

    /// Best achievable score.
    #[must_use]
    pub fn max_score(&self) -> u32 {
        (self.num_colors * self.num_ranks) as u32
    }

    /// Cards dealt before the first turn.
    #[must_use]
    pub fn dealt_cards(&self) -> usize {
        self.num_players * self.hand_size
    }

    /// Check the configuration for internal consistency.
    pub fn validate(&self) -> Result<()> {
        let fail = |msg: String| Err(HanabiError::Config(msg));

        if !(2..=255).contains(&self.num_players) {
            return fail(format!("player count must be 2-255, got {}", self.num_players));
        }
        if self.hand_size == 0 {
            return fail("hand size must be at least 1".to_string());
        }
        if self.num_colors == 0 || self.num_colors > 255 || self.num_ranks == 0 || self.num_ranks > 255 {
            return fail(format!(
                "colors and ranks must be 1-255, got {} x {}",
                self.num_colors, self.num_ranks
            ));
        }
        if self.frequencies.num_colors() != self.num_colors || self.frequencies.num_ranks() != self.num_ranks {
            return fail(format!(
                "frequency table is {} x {} but config declares {} x {}",
                self.frequencies.num_colors(),
                self.frequencies.num_ranks(),
                self.num_colors,
                self.num_ranks
            ));
        }
        if self.frequencies.total() != self.deck_size {
            return fail(format!(
                "frequency table holds {} cards but deck size is {}",
                self.frequencies.total(),
                self.deck_size
            ));
        }
        if self.starting_num_hints > self.max_num_hints {
            return fail(format!(
                "starting hints {} exceed the cap of {}",
                self.starting_num_hints, self.max_num_hints
            ));
        }
        if self.max_num_mistakes == 0 {
            return fail("mistake limit must be at least 1".to_string());
        }
        if self.dealt_cards() >= self.deck_size {
            return fail(format!(
                "dealing {} cards leaves no draw pile from a deck of {}",
                self.dealt_cards(),
                self.deck_size
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HanabiConfig::default();
        assert_eq!(config.num_players, 2);
        assert_eq!(config.hand_size, 5);
        assert_eq!(config.deck_size, 50);
        assert_eq!(config.max_score(), 25);
        assert_eq!(config.top_rank(), Rank::new(4));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_standard_hand_sizes() {
        assert_eq!(HanabiConfig::standard(3).hand_size, 5);
        assert_eq!(HanabiConfig::standard(4).hand_size, 4);
        assert_eq!(HanabiConfig::standard(5).hand_size, 4);
    }

    #[test]
    fn test_frequency_table_uniform() {
        let table = FrequencyTable::uniform(5, &STANDARD_RANK_COPIES);
        assert_eq!(table.total(), 50);
        assert_eq!(table.copies(Color::new(3), Rank::new(0)), 3);
        assert_eq!(table.copies(Color::new(3), Rank::new(4)), 1);
        assert_eq!(table.copies(Color::new(9), Rank::new(0)), 0);
    }

    #[test]
    fn test_check_deck() {
        let table = FrequencyTable::uniform(2, &[2, 1]);
        let mut deck = table.build_deck();
        deck.reverse();
        assert!(table.check_deck(&deck).is_ok());

        // Right length, wrong multiset
        deck[0] = Card::new(Color(0), Rank(0));
        assert!(matches!(table.check_deck(&deck), Err(HanabiError::Config(_))));

        // Face outside the configured colors
        deck[0] = Card::new(Color(7), Rank(0));
        assert!(matches!(table.check_deck(&deck), Err(HanabiError::Config(_))));

        assert!(table.check_deck(&deck[1..]).is_err());
    }

    #[test]
    fn test_build_deck_order() {
        let table = FrequencyTable::uniform(2, &[2, 1]);
        let deck = table.build_deck();
        let expected = vec![
            Card::new(Color(0), Rank(0)),
            Card::new(Color(0), Rank(0)),
            Card::new(Color(0), Rank(1)),
            Card::new(Color(1), Rank(0)),
            Card::new(Color(1), Rank(0)),
            Card::new(Color(1), Rank(1)),
        ];
        assert_eq!(deck, expected);
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        assert!(FrequencyTable::from_rows(&[vec![1, 1], vec![1]]).is_err());
        let table = FrequencyTable::from_rows(&[vec![1, 2], vec![3, 0]]).unwrap();
        assert_eq!(table.total(), 6);
        assert_eq!(table.copies(Color(1), Rank(0)), 3);
    }

    #[test]
    fn test_deck_size_mismatch() {
        let config = HanabiConfig::default().with_deck_size(49);
        let err = config.validate().unwrap_err();
        assert!(matches!(err, HanabiError::Config(_)));
        assert!(err.to_string().contains("50 cards but deck size is 49"));
    }

    #[test]
    fn test_dimension_mismatch() {
        let mut config = HanabiConfig::default();
        config.num_colors = 4;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_starting_hints_above_cap() {
        let config = HanabiConfig::default().with_hints(4, 5);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_no_draw_pile() {
        let config = HanabiConfig::default().with_hand_size(25);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_single_player_rejected() {
        let config = HanabiConfig::default().with_players(1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_with_frequencies_updates_dimensions() {
        let config = HanabiConfig::default().with_frequencies(FrequencyTable::uniform(3, &[3, 2, 1]));
        assert_eq!(config.num_colors, 3);
        assert_eq!(config.num_ranks, 3);
        assert_eq!(config.deck_size, 18);
        assert_eq!(config.max_score(), 9);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serde() {
        let config = HanabiConfig::standard(4);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: HanabiConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
