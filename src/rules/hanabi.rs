//! The standard Hanabi rules.
//!
//! Every transition follows the same shape: validate, clone the input state,
//! apply the action's own effect, then run the shared end-of-turn bookkeeping
//! (replacement draw, final-round check, seat rotation).

use smallvec::{smallvec, SmallVec};

use crate::core::action::Action;
use crate::core::card::{Card, Color, Rank};
use crate::core::config::HanabiConfig;
use crate::core::error::{HanabiError, Result};
use crate::core::knowledge::Knowledge;
use crate::core::player::PlayerId;
use crate::core::rng::GameRng;
use crate::core::state::{CardState, GameState, Location};

use super::engine::RulesEngine;

/// Rules for one configured game.
#[derive(Clone, Debug)]
pub struct HanabiRules {
    config: HanabiConfig,
}

impl HanabiRules {
    /// Create rules for a validated configuration.
    pub fn new(config: HanabiConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Deal a deck in the given order, without shuffling.
    ///
    /// The deck must be a permutation of the configured frequency table.
    ///
    /// The first `hand_size` cards go to player 0, the next `hand_size` to
    /// player 1, and so on. The rest form the draw pile, drawn front to back.
    pub fn initialize_with_deck(&self, deck: Vec<Card>) -> Result<GameState> {
        let config = &self.config;
        if deck.len() != config.deck_size {
            return Err(HanabiError::Config(format!(
                "deck holds {} cards but deck size is {}",
                deck.len(),
                config.deck_size
            )));
        }
        config.frequencies.check_deck(&deck)?;

        let dealt = config.dealt_cards();
        let cards = deck
            .into_iter()
            .enumerate()
            .map(|(i, card)| {
                let (location, age) = if i < dealt {
                    (Location::Hand(PlayerId::new((i / config.hand_size) as u8)), 0)
                } else {
                    (Location::DrawPile, (i - dealt + 1) as u32)
                };
                CardState {
                    card,
                    location,
                    knowledge: Knowledge::unknown(config.num_colors, config.num_ranks),
                    age,
                }
            })
            .collect();

        let next_draw_index = (dealt < config.deck_size).then_some(dealt);
        Ok(GameState::new(cards, config.starting_num_hints, next_draw_index))
    }

    /// Whether the card at `index` would land on the fireworks if played.
    ///
    /// Ranks of a color must be played in strict sequence from rank 0, so a
    /// card is playable only when its rank is the next one expected.
    #[must_use]
    pub fn is_playable(&self, state: &GameState, index: usize) -> bool {
        let Some(target) = state.card(index) else {
            return false;
        };

        let mut consumed: SmallVec<[bool; 8]> = smallvec![false; self.config.num_ranks];
        for (_, played) in state.cards_at(Location::InPlay) {
            if played.card.color == target.card.color {
                if let Some(slot) = consumed.get_mut(played.card.rank.index()) {
                    *slot = true;
                }
            }
        }

        let next_expected = consumed.iter().take_while(|c| **c).count();
        target.card.rank.index() == next_expected
    }

    fn holds_in_hand(state: &GameState, index: usize, player: PlayerId) -> bool {
        state
            .card(index)
            .is_some_and(|c| c.location == Location::Hand(player))
    }

    fn can_hint(&self, state: &GameState, target: PlayerId, matches: impl Fn(&Card) -> bool) -> bool {
        state.hints_available > 0
            && target != state.player_turn
            && target.index() < self.config.num_players
            && state
                .cards_at(Location::Hand(target))
                .any(|(_, held)| matches(&held.card))
    }

    /// Narrow knowledge of every card in `target`'s hand.
    ///
    /// Matching cards learn the exact value; the rest learn what they are not.
    fn apply_hint(
        next: &mut GameState,
        target: PlayerId,
        matches: impl Fn(&Card) -> bool,
        confirm: impl Fn(&mut Knowledge),
        exclude: impl Fn(&mut Knowledge),
    ) {
        next.hints_available -= 1;
        for index in next.hand(target) {
            let hit = next.card(index).is_some_and(|held| matches(&held.card));
            if let Some(knowledge) = next.knowledge_mut(index) {
                if hit {
                    confirm(knowledge);
                } else {
                    exclude(knowledge);
                }
            }
        }
    }

    fn regain_hint(&self, next: &mut GameState) {
        if next.hints_available < self.config.max_num_hints {
            next.hints_available += 1;
        }
    }

    /// Move the next draw-pile card into `player`'s hand.
    fn draw_replacement(next: &mut GameState, player: PlayerId) -> Result<()> {
        let Some(index) = next.next_draw_index else {
            return Ok(());
        };

        match next.card(index).map(|c| c.location) {
            Some(Location::DrawPile) => {}
            other => {
                return Err(HanabiError::InvariantViolation(format!(
                    "card {index} slated to be drawn is at {other:?}, not in the draw pile"
                )));
            }
        }

        next.set_location(index, Location::Hand(player));

        let following = index + 1;
        if following >= next.deck_size() {
            next.next_draw_index = None;
            next.last_player_to_play = Some(player);
        } else {
            next.next_draw_index = Some(following);
        }
        Ok(())
    }

    /// Shared end-of-turn bookkeeping for every action kind.
    ///
    /// The final-round check runs after the draw, so the turn that takes the
    /// last card from the draw pile also ends the game.
    fn finish_turn(&self, next: &mut GameState, draws: bool) -> Result<()> {
        let actor = next.player_turn;

        if draws {
            Self::draw_replacement(next, actor)?;
        }

        if next.last_player_to_play == Some(actor) {
            next.last_player_has_played = true;
        }

        next.player_turn = actor.next(self.config.num_players);
        Ok(())
    }
}

impl RulesEngine for HanabiRules {
    fn config(&self) -> &HanabiConfig {
        &self.config
    }

    fn initialize(&self, rng: &mut GameRng) -> Result<GameState> {
        let mut deck = self.config.frequencies.build_deck();
        rng.shuffle(&mut deck);
        self.initialize_with_deck(deck)
    }

    fn validate(&self, state: &GameState, action: &Action) -> bool {
        match *action {
            Action::Play { card } | Action::Discard { card } => {
                Self::holds_in_hand(state, card, state.player_turn)
            }
            Action::HintColor { target, color } => {
                self.can_hint(state, target, |card| card.color == color)
            }
            Action::HintRank { target, rank } => {
                self.can_hint(state, target, |card| card.rank == rank)
            }
        }
    }

    fn perform(&self, state: &GameState, action: &Action) -> Result<GameState> {
        if !self.validate(state, action) {
            return Err(HanabiError::InvalidAction {
                action: *action,
                player: state.player_turn,
            });
        }

        let mut next = state.clone();

        match *action {
            Action::Play { card } => {
                if self.is_playable(state, card) {
                    next.set_location(card, Location::InPlay);
                    let top = state.card(card).is_some_and(|c| c.card.rank == self.config.top_rank());
                    if top {
                        self.regain_hint(&mut next);
                    }
                } else {
                    next.set_location(card, Location::Discard);
                    next.mistakes += 1;
                }
            }
            Action::Discard { card } => {
                next.set_location(card, Location::Discard);
                self.regain_hint(&mut next);
            }
            Action::HintColor { target, color } => Self::apply_hint(
                &mut next,
                target,
                |card| card.color == color,
                |k| k.confirm_color(color),
                |k| k.exclude_color(color),
            ),
            Action::HintRank { target, rank } => Self::apply_hint(
                &mut next,
                target,
                |card| card.rank == rank,
                |k| k.confirm_rank(rank),
                |k| k.exclude_rank(rank),
            ),
        }

        self.finish_turn(&mut next, action.card().is_some())?;
        Ok(next)
    }

    fn legal_actions(&self, state: &GameState) -> Vec<Action> {
        let actor = state.player_turn;
        let mut actions = Vec::new();

        for card in state.hand(actor) {
            actions.push(Action::Play { card });
            actions.push(Action::Discard { card });
        }

        if state.hints_available == 0 {
            return actions;
        }

        for target in actor.others(self.config.num_players) {
            let mut colors: SmallVec<[bool; 8]> = smallvec![false; self.config.num_colors];
            let mut ranks: SmallVec<[bool; 8]> = smallvec![false; self.config.num_ranks];

            for (_, held) in state.cards_at(Location::Hand(target)) {
                if let Some(seen) = colors.get_mut(held.card.color.index()) {
                    *seen = true;
                }
                if let Some(seen) = ranks.get_mut(held.card.rank.index()) {
                    *seen = true;
                }
            }

            actions.extend(
                Color::all(self.config.num_colors)
                    .filter(|c| colors[c.index()])
                    .map(|color| Action::HintColor { target, color }),
            );
            actions.extend(
                Rank::all(self.config.num_ranks)
                    .filter(|r| ranks[r.index()])
                    .map(|rank| Action::HintRank { target, rank }),
            );
        }

        actions
    }

    fn score(&self, state: &GameState) -> u32 {
        Color::all(self.config.num_colors)
            .map(|color| state.highest_in_play(color).map_or(0, Rank::value))
            .sum()
    }

    /// Description of `action` as seen by everyone except the card's owner.
    ///
    /// Must be called with the state the action is about to be applied to.
    fn describe(&self, state: &GameState, action: &Action) -> String {
        match *action {
            Action::Play { card } => match state.card(card) {
                Some(played) if self.is_playable(state, card) => {
                    format!("playing {} it worked!", played.card)
                }
                Some(played) => format!("playing {} it was a mistake.", played.card),
                None => action.describe_hidden(),
            },
            Action::Discard { card } => match state.card(card) {
                Some(discarded) => format!("discarding {}", discarded.card),
                None => action.describe_hidden(),
            },
            Action::HintColor { .. } | Action::HintRank { .. } => action.describe_hidden(),
        }
    }
}
