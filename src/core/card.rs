//! Card faces: color and rank.
//!
//! Colors and ranks are small closed enumerations whose size comes from
//! `HanabiConfig`. The engine only compares them; names exist for display.

use serde::{Deserialize, Serialize};

const COLOR_NAMES: [&str; 5] = ["red", "green", "yellow", "cyan", "white"];

/// Card color (0-based index into the configured color set).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Color(pub u8);

impl Color {
    /// Create a new color.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Get the raw color index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over the first `count` colors.
    pub fn all(count: usize) -> impl Iterator<Item = Color> {
        (0..count as u8).map(Color)
    }

    /// Display name. Colors outside the classic five fall back to their index.
    #[must_use]
    pub fn name(self) -> String {
        COLOR_NAMES
            .get(self.index())
            .map_or_else(|| format!("color {}", self.0), |name| (*name).to_string())
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name())
    }
}

/// Card rank (0-based; rank 0 is the card printed "1").
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Rank(pub u8);

impl Rank {
    /// Create a new rank.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Get the raw rank index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Face value as printed on the card, and as counted for score.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0 as u32 + 1
    }

    /// Iterate over the first `count` ranks.
    pub fn all(count: usize) -> impl Iterator<Item = Rank> {
        (0..count as u8).map(Rank)
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// A card face. Fixed at deck construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub color: Color,
    pub rank: Rank,
}

impl Card {
    #[must_use]
    pub const fn new(color: Color, rank: Rank) -> Self {
        Self { color, rank }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.color, self.rank)
    }
}
