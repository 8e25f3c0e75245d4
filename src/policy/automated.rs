//! Automated player policies.
//!
//! A policy sees only what the seat itself could see: the discard top, the
//! active color, and its own hand. It needs no transport, no table and no
//! game state, so it is testable on its own.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Color};
use crate::core::{Action, GameRng};

/// What an automated player wants to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    /// Play the card at `index`, naming `color` if it is Wild.
    Play { index: usize, color: Option<Color> },
    /// No playable card: draw one.
    Draw,
}

impl Decision {
    /// The turn action that carries out this decision.
    #[must_use]
    pub fn into_action(self) -> Action {
        match self {
            Decision::Play { index, color } => Action::Play { index, color },
            Decision::Draw => Action::Draw,
        }
    }
}

/// Chooses moves for automated players.
pub trait PlayerPolicy: Send + Sync {
    fn decide(&self, top: &Card, active: Color, hand: &[Card], rng: &mut GameRng) -> Decision;
}

/// Plays the first legal card in hand order; draws when there is none.
///
/// A Wild card gets a uniformly random concrete color. Apart from that the
/// choice is deterministic.
///
/// ```
/// use uno_engine::cards::{Card, Color, Face};
/// use uno_engine::core::GameRng;
/// use uno_engine::policy::{Decision, FirstPlayable, PlayerPolicy};
///
/// let top = Card::new(Color::Red, Face::Number(5));
/// let hand = [Card::new(Color::Blue, Face::Number(1)), Card::new(Color::Blue, Face::Number(5))];
///
/// let decision = FirstPlayable.decide(&top, Color::Red, &hand, &mut GameRng::new(0));
/// assert_eq!(decision, Decision::Play { index: 1, color: None });
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstPlayable;

impl PlayerPolicy for FirstPlayable {
    fn decide(&self, top: &Card, active: Color, hand: &[Card], rng: &mut GameRng) -> Decision {
        match hand.iter().position(|card| card.can_play(top, active)) {
            Some(index) => {
                let color = hand[index].is_wild().then(|| Color::random(rng));
                Decision::Play { index, color }
            }
            None => Decision::Draw,
        }
    }
}
