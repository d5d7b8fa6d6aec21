//! Full games through the turn driver.
//!
//! These tests run complete seeded games for every supported seat count and
//! check that a seed reproduces its game exactly.

use std::collections::HashSet;

use hanabi_engine::core::Result;
use hanabi_engine::{
    Action, Controller, EndReason, FirstLegalController, Game, GameRng, GameState, GameStatus, HanabiConfig,
    HanabiError, HanabiRules, PlayerId, RandomController, RulesEngine,
};

fn standard_rules(players: usize) -> HanabiRules {
    HanabiRules::new(HanabiConfig::standard(players)).unwrap()
}

/// Test that a seeded random game runs to a legal end.
#[test]
fn test_random_game_completes() {
    let mut game = Game::random(standard_rules(2), 3517219547).unwrap();
    let summary = game.run().unwrap();

    assert!(summary.score <= summary.max_score);
    assert!(summary.mistakes <= 3);
    assert!(summary.hints_available <= 8);
    assert_ne!(summary.end_reason, EndReason::NoLegalActions);
    assert_eq!(game.engine().final_score(game.state()), Some(summary.score));
}

/// Test that the same seed gives the same game, action for action.
#[test]
fn test_same_seed_same_game() {
    for seed in [1, 42, 3517219547, u64::MAX] {
        let mut a = Game::random(standard_rules(3), seed).unwrap();
        let mut b = Game::random(standard_rules(3), seed).unwrap();

        let summary_a = a.run().unwrap();
        let summary_b = b.run().unwrap();

        assert_eq!(summary_a, summary_b);
        assert_eq!(a.history(), b.history());
    }
}

/// Test that different seeds deal different games.
#[test]
fn test_different_seeds_differ() {
    let a = Game::random(standard_rules(2), 10).unwrap();
    let b = Game::random(standard_rules(2), 11).unwrap();
    assert_ne!(a.state(), b.state());
}

/// Test that games run for 2 to 5 players with every seat taking turns.
#[test]
fn test_n_player_games() {
    for players in 2..=5 {
        let mut game = Game::random(standard_rules(players), 7 + players as u64).unwrap();
        let summary = game.run().unwrap();

        let seats: HashSet<PlayerId> =
            game.history().actions().map(|record| record.player).collect();
        assert_eq!(seats.len(), players, "{players} players should all act");

        // Seats rotate strictly.
        for (turn, record) in game.history().actions().enumerate() {
            assert_eq!(record.player.index(), turn % players);
            assert_eq!(record.turn as usize, turn);
        }
        assert_eq!(summary.turns, game.history().turns());
    }
}

/// Test that drawing the last card ends the game on that turn.
#[test]
fn test_exhausting_deck_ends_game() {
    let controllers: Vec<Box<dyn Controller<HanabiRules>>> =
        vec![Box::new(DiscardOldest), Box::new(DiscardOldest)];
    let mut game = Game::new(standard_rules(2), controllers, 0).unwrap();
    let summary = game.run().unwrap();

    assert_eq!(summary.end_reason, EndReason::FinalRoundComplete);
    assert_eq!(summary.score, 0);
    assert_eq!(summary.mistakes, 0);
    // The 40th discard draws the last card and ends the game.
    assert_eq!(summary.turns, 40);
    assert_eq!(game.state().last_player_to_play, Some(PlayerId::new(1)));
    assert_eq!(game.state().draw_pile_size(), 0);
    assert_eq!(game.status(), GameStatus::Ended(EndReason::FinalRoundComplete));
}

/// Test that replaying the history rebuilds the final state.
#[test]
fn test_replay_rebuilds_final_state() {
    for players in [2, 4] {
        let mut game = Game::random(standard_rules(players), 2024).unwrap();
        game.run().unwrap();
        assert_eq!(&game.replay().unwrap(), game.state());
    }
}

/// Test that a strategy that always plays its first card loses to mistakes.
#[test]
fn test_first_legal_strategy() {
    let controllers: Vec<Box<dyn Controller<HanabiRules>>> = (0..3)
        .map(|_| Box::new(FirstLegalController) as Box<dyn Controller<HanabiRules>>)
        .collect();
    let mut game = Game::new(standard_rules(3), controllers, 99).unwrap();
    let summary = game.run().unwrap();

    assert_eq!(summary.end_reason, EndReason::TooManyMistakes);
    assert!(game.history().actions().all(|r| matches!(r.action, Action::Play { .. })));
}

/// Test that the controller count must match the seat count.
#[test]
fn test_wrong_controller_count() {
    let controllers: Vec<Box<dyn Controller<HanabiRules>>> =
        vec![Box::new(RandomController), Box::new(RandomController)];
    let result = Game::new(standard_rules(4), controllers, 1);
    assert!(matches!(result, Err(HanabiError::Config(_))));
}

/// Discards the oldest card in hand every turn.
struct DiscardOldest;

impl Controller<HanabiRules> for DiscardOldest {
    fn choose_action(
        &mut self,
        _engine: &HanabiRules,
        state: &GameState,
        _rng: &mut GameRng,
    ) -> Result<Action> {
        let hand = state.hand(state.player_turn);
        hand.first()
            .map(|&card| Action::Discard { card })
            .ok_or(HanabiError::NoLegalActions)
    }

    fn name(&self) -> &'static str {
        "discard-oldest"
    }
}
