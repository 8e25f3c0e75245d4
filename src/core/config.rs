//! Game configuration.
//!
//! `UnoConfig` carries the table rules a front end may vary: starting hand
//! size, seat bounds, whether the engine polices turn ownership, and whether
//! action cards carry their gameplay effects.

use serde::{Deserialize, Serialize};

use super::error::SetupError;
use crate::cards::deck::DECK_SIZE;

/// Who the engine lets act.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOrder {
    /// Play and draw are rejected with `NotYourTurn` for any seat but the current one.
    #[default]
    Enforced,
    /// Any seat may play or draw; turn ownership is the caller's problem.
    Permissive,
}

/// What a played action card does beyond setting the active colour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectMode {
    /// Skip, Reverse, Draw2 and WildDraw4 only change the active colour.
    #[default]
    ColorOnly,
    /// Action cards skip, reverse and force draws as in the printed rules.
    Standard,
}

/// Table rules for one game.
///
/// ```
/// use uno_engine::core::{EffectMode, UnoConfig};
///
/// let config = UnoConfig::new().with_hand_size(5).with_effects(EffectMode::Standard);
/// assert!(config.validate(4).is_ok());
/// assert!(config.validate(1).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnoConfig {
    /// Cards dealt to each seat.
    pub hand_size: usize,
    /// Fewest seats a game may start with.
    pub min_players: usize,
    /// Most seats a game may start with.
    pub max_players: usize,
    pub turn_order: TurnOrder,
    pub effects: EffectMode,
    /// Upper bound on automated actions taken by one `Table::run_automated` call.
    pub max_automated_turns: u32,
}

impl Default for UnoConfig {
    fn default() -> Self {
        Self {
            hand_size: 7,
            min_players: 2,
            max_players: 10,
            turn_order: TurnOrder::Enforced,
            effects: EffectMode::ColorOnly,
            max_automated_turns: 1000,
        }
    }
}

impl UnoConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    #[must_use]
    pub fn with_player_bounds(mut self, min: usize, max: usize) -> Self {
        self.min_players = min;
        self.max_players = max;
        self
    }

    #[must_use]
    pub fn with_turn_order(mut self, turn_order: TurnOrder) -> Self {
        self.turn_order = turn_order;
        self
    }

    /// Shorthand for `TurnOrder::Permissive`.
    #[must_use]
    pub fn permissive(self) -> Self {
        self.with_turn_order(TurnOrder::Permissive)
    }

    #[must_use]
    pub fn with_effects(mut self, effects: EffectMode) -> Self {
        self.effects = effects;
        self
    }

    #[must_use]
    pub fn with_max_automated_turns(mut self, turns: u32) -> Self {
        self.max_automated_turns = turns;
        self
    }

    /// Check that a game with `player_count` seats can be dealt.
    ///
    /// Dealing needs `hand_size` cards per seat plus the initial flip.
    pub fn validate(&self, player_count: usize) -> Result<(), SetupError> {
        let min = self.min_players.max(2);
        if player_count < min {
            return Err(SetupError::TooFewPlayers { count: player_count, min });
        }
        let max = self.max_players.min(u8::MAX as usize);
        if player_count > max {
            return Err(SetupError::TooManyPlayers { count: player_count, max });
        }
        if self.hand_size == 0 {
            return Err(SetupError::EmptyHands);
        }
        let needed = cards_needed(self.hand_size, player_count);
        if needed > DECK_SIZE {
            return Err(SetupError::NotEnoughCards { needed, available: DECK_SIZE });
        }
        Ok(())
    }
}

/// Cards a deal takes: `hand_size` per seat plus the flip. Saturates on overflow.
pub(crate) fn cards_needed(hand_size: usize, player_count: usize) -> usize {
    hand_size
        .checked_mul(player_count)
        .and_then(|n| n.checked_add(1))
        .unwrap_or(usize::MAX)
}
