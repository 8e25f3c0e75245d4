//! N-player capability verification tests.
//!
//! These tests verify that the engine has no hidden 2-player assumptions
//! and works for every seat count the default table allows.

use uno_engine::cards::DECK_SIZE;
use uno_engine::core::{Direction, GameRng, GameState, Identity, PlayerId, SetupError, UnoConfig};
use uno_engine::policy::FirstPlayable;
use uno_engine::rules::{RulesEngine, UnoRules};
use uno_engine::session::Table;
use uno_engine::EffectMode;

fn humans(count: usize) -> Vec<Identity> {
    (0..count).map(|i| Identity::human(format!("p{i}"))).collect()
}

fn bots(count: usize) -> Vec<Identity> {
    (1..=count).map(|i| Identity::automated(format!("UNO Bot {i}"))).collect()
}

/// Test that dealing works for 2 to 10 players.
#[test]
fn test_deal_for_all_player_counts() {
    for player_count in 2..=10 {
        let state = GameState::new(humans(player_count), UnoConfig::default(), GameRng::new(42)).unwrap();

        assert_eq!(state.player_count(), player_count);
        for seat in PlayerId::all(player_count) {
            assert_eq!(state.hand(seat).len(), 7, "{player_count} players, {seat}");
        }
        assert_eq!(state.draw_pile_len(), DECK_SIZE - 7 * player_count - 1);
        assert_eq!(state.discard_len(), 1);
        assert_eq!(state.cards().count(), DECK_SIZE);
        assert!(state.active_color().is_concrete());
    }
}

/// Test that seat counts outside the configured bounds are refused.
#[test]
fn test_player_count_bounds() {
    let err = GameState::new(humans(1), UnoConfig::default(), GameRng::new(1)).unwrap_err();
    assert_eq!(err, SetupError::TooFewPlayers { count: 1, min: 2 });

    let err = GameState::new(humans(11), UnoConfig::default(), GameRng::new(1)).unwrap_err();
    assert_eq!(err, SetupError::TooManyPlayers { count: 11, max: 10 });
}

/// Test that duplicate identities cannot share a table.
#[test]
fn test_duplicate_players_rejected() {
    let players = vec![Identity::human("alice"), Identity::human("bob"), Identity::human("alice")];
    let err = GameState::new(players, UnoConfig::default(), GameRng::new(1)).unwrap_err();
    assert_eq!(err, SetupError::DuplicatePlayer("alice".to_string()));

    // Same name, different kind: two distinct identities.
    let players = vec![Identity::human("UNO Bot 1"), Identity::automated("UNO Bot 1")];
    assert!(GameState::new(players, UnoConfig::default(), GameRng::new(1)).is_ok());
}

/// Test that the turn visits every seat once per cycle in both directions.
#[test]
fn test_turn_cycling() {
    for player_count in 2..=10 {
        let mut state = GameState::new(humans(player_count), UnoConfig::default(), GameRng::new(5)).unwrap();

        let clockwise: Vec<usize> = (0..player_count)
            .map(|_| {
                let seat = state.current_seat().index();
                state.advance_turn();
                seat
            })
            .collect();
        assert_eq!(clockwise, (0..player_count).collect::<Vec<_>>());
        assert_eq!(state.current_seat(), PlayerId::new(0));

        assert_eq!(state.reverse_direction(), Direction::CounterClockwise);
        let counter: Vec<usize> = (0..player_count)
            .map(|_| {
                let seat = state.current_seat().index();
                state.advance_turn();
                seat
            })
            .collect();
        let mut expected = vec![0];
        expected.extend((1..player_count).rev());
        assert_eq!(counter, expected);
        assert_eq!(state.current_seat(), PlayerId::new(0));
    }
}

/// Test that only the current seat has legal actions.
#[test]
fn test_legal_actions_only_for_current_seat() {
    let rules = UnoRules::default();
    let mut state = GameState::new(humans(5), UnoConfig::default(), GameRng::new(9)).unwrap();

    for _ in 0..5 {
        let current = state.current_seat();
        for seat in PlayerId::all(5) {
            let actions = rules.legal_actions(&state, seat);
            assert_eq!(!actions.is_empty(), seat == current);
        }
        state.advance_turn();
    }
}

/// Test complete automated games for several table sizes in both effect modes.
#[test]
fn test_automated_games_finish_for_n_players() {
    for player_count in [2, 3, 4, 6, 10] {
        for effects in [EffectMode::ColorOnly, EffectMode::Standard] {
            let config = UnoConfig::default()
                .with_effects(effects)
                .with_max_automated_turns(100_000);
            let mut table = Table::new(bots(player_count), config, GameRng::new(player_count as u64)).unwrap();

            let events = table.run_automated(&FirstPlayable);

            assert!(table.winner().is_some(), "{player_count} players, {effects:?}");
            assert!(events.last().is_some_and(|event| event.winner.is_some()));
            assert_eq!(table.state().cards().count(), DECK_SIZE);
            assert_eq!(table.state().history().len(), events.len());
        }
    }
}
