//! Actions a seat can take on its turn.
//!
//! An `Action` is what a front end (or an automated policy) submits to the
//! rules layer. `ActionRecord` is the history entry kept once it succeeds.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::cards::Color;

/// A turn action.
///
/// ```
/// use uno_engine::cards::Color;
/// use uno_engine::core::Action;
///
/// let wild = Action::play_wild(2, Color::Green);
/// assert_eq!(wild, Action::Play { index: 2, color: Some(Color::Green) });
/// assert_eq!(Action::play(0), Action::Play { index: 0, color: None });
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Play the card at `index` (0-based) in hand, naming `color` for a Wild.
    Play { index: usize, color: Option<Color> },
    /// Draw one card and end the turn.
    Draw,
    /// End the turn without playing.
    Pass,
}

impl Action {
    #[must_use]
    pub const fn play(index: usize) -> Self {
        Self::Play { index, color: None }
    }

    #[must_use]
    pub const fn play_wild(index: usize, color: Color) -> Self {
        Self::Play { index, color: Some(color) }
    }
}

/// A successful action with its position in the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The seat that acted.
    pub player: PlayerId,

    pub action: Action,

    /// Turn number when the action was taken (starts at 1).
    pub turn: u32,

    /// Position in the whole game's history.
    pub sequence: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(player: PlayerId, action: Action, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            turn,
            sequence,
        }
    }
}
