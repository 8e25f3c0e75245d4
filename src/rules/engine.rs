//! Rules engine trait and the UNO turn driver.
//!
//! Front ends and policies submit whole turns as `Action`s:
//! - what actions are legal for a seat
//! - how an action plays out (play, effects, turn advance)
//! - when the game is over

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, Color};
use crate::core::{Action, EffectMode, GameState, MoveError, PlayerId, UnoConfig};
use crate::effects::{AppliedBatch, EffectResolver};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// This seat emptied its hand first.
    Winner(PlayerId),
}

impl GameResult {
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
        }
    }
}

/// What an applied action did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionOutcome {
    /// A card was played; `effects` lists what action-card effects did.
    Played { card: Card, effects: AppliedBatch },
    /// Cards were drawn. Only the drawing seat should see which.
    Drew { cards: SmallVec<[Card; 4]> },
    Passed,
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_actions`: empty if the seat cannot act
/// - `apply_action`: must leave state untouched when it returns an error,
///   and must refuse every action once the game is over
/// - `is_terminal`: `None` while the game continues
pub trait RulesEngine {
    /// Every action `player` may take right now.
    fn legal_actions(&self, state: &GameState, player: PlayerId) -> Vec<Action>;

    /// Carry out one turn action for `player`.
    fn apply_action(
        &self,
        state: &mut GameState,
        player: PlayerId,
        action: &Action,
    ) -> Result<ActionOutcome, MoveError>;

    /// Check if the game is over.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;

    // === Convenience Methods ===

    fn is_legal(&self, state: &GameState, player: PlayerId, action: &Action) -> bool {
        self.legal_actions(state, player).contains(action)
    }
}

/// UNO turn sequencing on top of the base engine.
///
/// Only the current seat may drive a turn, whatever the table's
/// `TurnOrder`: the driver moves the turn on, so acting for another seat
/// would hand that seat's turn away.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UnoRules {
    effects: EffectMode,
}

impl UnoRules {
    #[must_use]
    pub const fn new(effects: EffectMode) -> Self {
        Self { effects }
    }

    #[must_use]
    pub fn from_config(config: &UnoConfig) -> Self {
        Self::new(config.effects)
    }

    #[must_use]
    pub const fn effects(&self) -> EffectMode {
        self.effects
    }

    fn check_actor(state: &GameState, player: PlayerId) -> Result<(), MoveError> {
        if state.identity(player).is_none() {
            return Err(MoveError::UnknownSeat(player));
        }
        let current = state.current_seat();
        if player != current {
            return Err(MoveError::NotYourTurn { player, current });
        }
        Ok(())
    }
}

impl RulesEngine for UnoRules {
    fn legal_actions(&self, state: &GameState, player: PlayerId) -> Vec<Action> {
        if state.is_over() || Self::check_actor(state, player).is_err() {
            return vec![];
        }

        let top = state.top_of_discard();
        let active = state.active_color();
        let mut actions = Vec::new();

        for (index, card) in state.hand(player).iter().enumerate() {
            if !card.can_play(&top, active) {
                continue;
            }
            if card.is_wild() {
                actions.extend(Color::CONCRETE.map(|color| Action::play_wild(index, color)));
            } else {
                actions.push(Action::play(index));
            }
        }

        actions.push(Action::Draw);
        actions.push(Action::Pass);
        actions
    }

    fn apply_action(
        &self,
        state: &mut GameState,
        player: PlayerId,
        action: &Action,
    ) -> Result<ActionOutcome, MoveError> {
        if let Some(winner) = state.winner() {
            return Err(MoveError::GameOver { winner });
        }
        Self::check_actor(state, player)?;

        let outcome = match *action {
            Action::Play { index, color } => {
                let card = state.attempt_play(player, index, color)?;
                let mut effects = AppliedBatch::new();
                if self.effects == EffectMode::Standard && !state.is_hand_empty(player) {
                    effects = EffectResolver::resolve_card(state, &card);
                }
                ActionOutcome::Played { card, effects }
            }
            Action::Draw => {
                let outcome = state.draw_cards(player, 1)?;
                ActionOutcome::Drew {
                    cards: outcome.drawn,
                }
            }
            Action::Pass => ActionOutcome::Passed,
        };

        // Recorded under the turn it was taken in; effects never count turns.
        state.record_action(player, *action);
        // An empty hand ends the game where it stands.
        if !state.is_over() {
            state.advance_turn();
        }
        Ok(outcome)
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        state.winner().map(GameResult::Winner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Face;
    use crate::core::{GameRng, Identity};
    use crate::effects::AppliedEffect;

    const P0: PlayerId = PlayerId::new(0);
    const P1: PlayerId = PlayerId::new(1);
    const P2: PlayerId = PlayerId::new(2);

    fn game(seats: usize, config: UnoConfig) -> GameState {
        let players = (0..seats).map(|i| Identity::human(format!("p{i}"))).collect();
        GameState::new(players, config, GameRng::new(21)).unwrap()
    }

    fn red(n: u8) -> Card {
        Card::new(Color::Red, Face::Number(n))
    }

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(P1);
        assert!(result.is_winner(P1));
        assert!(!result.is_winner(P0));
    }

    #[test]
    fn test_legal_actions() {
        let mut state = game(2, UnoConfig::default());
        let wild = Card::new(Color::Wild, Face::Wild);
        state.rig(red(5), Color::Red, &[&[red(1), Card::new(Color::Blue, Face::Number(2)), wild]]);
        let rules = UnoRules::default();

        let actions = rules.legal_actions(&state, P0);

        assert_eq!(
            actions,
            vec![
                Action::play(0),
                Action::play_wild(2, Color::Red),
                Action::play_wild(2, Color::Blue),
                Action::play_wild(2, Color::Green),
                Action::play_wild(2, Color::Yellow),
                Action::Draw,
                Action::Pass,
            ]
        );
        assert!(rules.legal_actions(&state, P1).is_empty());
        assert!(rules.is_legal(&state, P0, &Action::Pass));
        assert!(!rules.is_legal(&state, P0, &Action::play(1)));
    }

    #[test]
    fn test_play_advances_turn() {
        let mut state = game(3, UnoConfig::default());
        state.rig(red(5), Color::Red, &[&[red(1), red(2)]]);
        let rules = UnoRules::default();

        let outcome = rules.apply_action(&mut state, P0, &Action::play(0)).unwrap();

        assert_eq!(outcome, ActionOutcome::Played { card: red(1), effects: AppliedBatch::new() });
        assert_eq!(state.current_seat(), P1);
        assert_eq!(state.history().len(), 1);
    }

    #[test]
    fn test_out_of_turn_rejected_even_when_permissive() {
        let mut state = game(2, UnoConfig::default().permissive());
        let rules = UnoRules::default();

        let err = rules.apply_action(&mut state, P1, &Action::Pass).unwrap_err();

        assert_eq!(err, MoveError::NotYourTurn { player: P1, current: P0 });
        assert_eq!(state.current_seat(), P0);
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_rejected_play_records_nothing() {
        let mut state = game(2, UnoConfig::default());
        state.rig(red(5), Color::Red, &[&[Card::new(Color::Blue, Face::Number(1))]]);
        let rules = UnoRules::default();

        let err = rules.apply_action(&mut state, P0, &Action::play(0)).unwrap_err();

        assert!(matches!(err, MoveError::InvalidMove { .. }));
        assert_eq!(state.current_seat(), P0);
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_draw_then_advance() {
        let mut state = game(2, UnoConfig::default());
        let rules = UnoRules::default();

        let outcome = rules.apply_action(&mut state, P0, &Action::Draw).unwrap();

        assert!(matches!(outcome, ActionOutcome::Drew { ref cards } if cards.len() == 1));
        assert_eq!(state.hand(P0).len(), 8);
        assert_eq!(state.current_seat(), P1);
    }

    #[test]
    fn test_pass_advances() {
        let mut state = game(3, UnoConfig::default());
        let rules = UnoRules::default();

        assert_eq!(rules.apply_action(&mut state, P0, &Action::Pass), Ok(ActionOutcome::Passed));
        assert_eq!(state.current_seat(), P1);
    }

    #[test]
    fn test_winning_play_ends_game() {
        let mut state = game(2, UnoConfig::default());
        state.rig(red(5), Color::Red, &[&[Card::new(Color::Red, Face::Skip)]]);
        let rules = UnoRules::new(EffectMode::Standard);

        let outcome = rules.apply_action(&mut state, P0, &Action::play(0)).unwrap();

        // No effects resolve and the turn stays with the winner.
        assert!(matches!(outcome, ActionOutcome::Played { ref effects, .. } if effects.is_empty()));
        assert_eq!(rules.is_terminal(&state), Some(GameResult::Winner(P0)));
        assert_eq!(state.current_seat(), P0);
        assert!(rules.legal_actions(&state, P0).is_empty());
    }

    #[test]
    fn test_no_actions_after_win() {
        let mut state = game(2, UnoConfig::default());
        state.rig(red(5), Color::Red, &[&[red(3)]]);
        let rules = UnoRules::default();
        rules.apply_action(&mut state, P0, &Action::play(0)).unwrap();

        for action in [Action::Draw, Action::Pass, Action::play(0)] {
            let err = rules.apply_action(&mut state, P0, &action).unwrap_err();
            assert_eq!(err, MoveError::GameOver { winner: P0 });
        }
        let err = rules.apply_action(&mut state, P1, &Action::Draw).unwrap_err();
        assert_eq!(err, MoveError::GameOver { winner: P0 });

        assert!(state.is_hand_empty(P0));
        assert_eq!(rules.is_terminal(&state), Some(GameResult::Winner(P0)));
        assert_eq!(state.history().len(), 1);
    }

    #[test]
    fn test_color_only_ignores_action_cards() {
        let mut state = game(3, UnoConfig::default());
        let skip = Card::new(Color::Red, Face::Skip);
        state.rig(red(5), Color::Red, &[&[skip, red(1)]]);
        let rules = UnoRules::default();

        rules.apply_action(&mut state, P0, &Action::play(0)).unwrap();

        assert_eq!(state.current_seat(), P1);
        assert_eq!(state.active_color(), Color::Red);
    }

    #[test]
    fn test_standard_effects_skip() {
        let mut state = game(3, UnoConfig::default());
        let skip = Card::new(Color::Red, Face::Skip);
        state.rig(red(5), Color::Red, &[&[skip, red(1)]]);
        let rules = UnoRules::new(EffectMode::Standard);

        let outcome = rules.apply_action(&mut state, P0, &Action::play(0)).unwrap();

        assert_eq!(
            outcome,
            ActionOutcome::Played {
                card: skip,
                effects: [AppliedEffect::Skipped(P1)].into_iter().collect(),
            }
        );
        assert_eq!(state.current_seat(), P2);
    }

    #[test]
    fn test_skip_keeps_turn_numbers_consecutive() {
        let mut state = game(3, UnoConfig::default());
        let skip = Card::new(Color::Red, Face::Skip);
        state.rig(red(5), Color::Red, &[&[skip, red(1)]]);
        let rules = UnoRules::new(EffectMode::Standard);

        rules.apply_action(&mut state, P0, &Action::play(0)).unwrap();
        assert_eq!(state.turn_number(), 2);

        rules.apply_action(&mut state, P2, &Action::Draw).unwrap();
        let turns: Vec<_> = state.history().iter().map(|record| record.turn).collect();
        assert_eq!(turns, vec![1, 2]);
        assert_eq!(state.current_seat(), P0);
    }

    #[test]
    fn test_standard_effects_wild_draw_four() {
        let mut state = game(3, UnoConfig::default());
        let wd4 = Card::new(Color::Wild, Face::WildDrawFour);
        state.rig(red(5), Color::Red, &[&[wd4, red(1)]]);
        let p1_before = state.hand(P1).len();
        let rules = UnoRules::from_config(&UnoConfig::default().with_effects(EffectMode::Standard));

        rules
            .apply_action(&mut state, P0, &Action::play_wild(0, Color::Yellow))
            .unwrap();

        assert_eq!(state.active_color(), Color::Yellow);
        assert_eq!(state.hand(P1).len(), p1_before + 4);
        assert_eq!(state.current_seat(), P2);
    }
}
