//! Per-card hint knowledge.
//!
//! Each card tracks which colors and ranks it could still be, from the point
//! of view of its holder. Hints only ever narrow these sets.

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use super::card::{Color, Rank};

/// Possibility flags for one card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Knowledge {
    possible_colors: SmallVec<[bool; 8]>,
    possible_ranks: SmallVec<[bool; 8]>,
}

impl Knowledge {
    /// Knowledge with every color and rank still possible.
    #[must_use]
    pub fn unknown(num_colors: usize, num_ranks: usize) -> Self {
        Self {
            possible_colors: smallvec![true; num_colors],
            possible_ranks: smallvec![true; num_ranks],
        }
    }

    #[must_use]
    pub fn is_color_possible(&self, color: Color) -> bool {
        self.possible_colors.get(color.index()).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn is_rank_possible(&self, rank: Rank) -> bool {
        self.possible_ranks.get(rank.index()).copied().unwrap_or(false)
    }

    /// Raw color flags, indexed by color.
    #[must_use]
    pub fn color_flags(&self) -> &[bool] {
        &self.possible_colors
    }

    /// Raw rank flags, indexed by rank.
    #[must_use]
    pub fn rank_flags(&self) -> &[bool] {
        &self.possible_ranks
    }

    /// Colors still possible, ascending.
    pub fn possible_colors(&self) -> impl Iterator<Item = Color> + '_ {
        flagged(&self.possible_colors).map(Color)
    }

    /// Ranks still possible, ascending.
    pub fn possible_ranks(&self) -> impl Iterator<Item = Rank> + '_ {
        flagged(&self.possible_ranks).map(Rank)
    }

    /// The card is known to be exactly `color`.
    pub fn confirm_color(&mut self, color: Color) {
        confirm(&mut self.possible_colors, color.index());
    }

    /// The card is known not to be `color`.
    pub fn exclude_color(&mut self, color: Color) {
        exclude(&mut self.possible_colors, color.index());
    }

    /// The card is known to be exactly `rank`.
    pub fn confirm_rank(&mut self, rank: Rank) {
        confirm(&mut self.possible_ranks, rank.index());
    }

    /// The card is known not to be `rank`.
    pub fn exclude_rank(&mut self, rank: Rank) {
        exclude(&mut self.possible_ranks, rank.index());
    }
}

fn flagged(flags: &[bool]) -> impl Iterator<Item = u8> + '_ {
    flags
        .iter()
        .enumerate()
        .filter(|(_, possible)| **possible)
        .map(|(i, _)| i as u8)
}

fn confirm(flags: &mut [bool], index: usize) {
    for (i, flag) in flags.iter_mut().enumerate() {
        *flag = i == index;
    }
}

fn exclude(flags: &mut [bool], index: usize) {
    if let Some(flag) = flags.get_mut(index) {
        *flag = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_is_all_possible() {
        let knowledge = Knowledge::unknown(5, 5);
        assert_eq!(knowledge.possible_colors().count(), 5);
        assert_eq!(knowledge.possible_ranks().count(), 5);
        assert!(knowledge.is_color_possible(Color::new(4)));
        assert!(!knowledge.is_color_possible(Color::new(5)));
    }

    #[test]
    fn test_confirm_color() {
        let mut knowledge = Knowledge::unknown(5, 5);
        knowledge.confirm_color(Color::new(2));

        assert_eq!(knowledge.possible_colors().collect::<Vec<_>>(), vec![Color::new(2)]);
        // Other dimension untouched
        assert_eq!(knowledge.possible_ranks().count(), 5);
    }

    #[test]
    fn test_exclude_rank() {
        let mut knowledge = Knowledge::unknown(5, 5);
        knowledge.exclude_rank(Rank::new(0));
        knowledge.exclude_rank(Rank::new(4));

        assert_eq!(
            knowledge.possible_ranks().collect::<Vec<_>>(),
            vec![Rank::new(1), Rank::new(2), Rank::new(3)]
        );
        assert_eq!(knowledge.rank_flags(), &[false, true, true, true, false]);
    }

    #[test]
    fn test_confirm_after_exclude() {
        let mut knowledge = Knowledge::unknown(4, 3);
        knowledge.exclude_color(Color::new(0));
        knowledge.confirm_color(Color::new(3));
        assert_eq!(knowledge.color_flags(), &[false, false, false, true]);
    }
}
