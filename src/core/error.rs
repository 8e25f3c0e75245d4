//! Error types for game setup and moves.
//!
//! Every error here is local and recoverable: the operation that produced
//! it left the game exactly as it found it.

use crate::cards::{Card, Color};

use super::player::PlayerId;

/// Why a game could not be created.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("need at least {min} players, got {count}")]
    TooFewPlayers { count: usize, min: usize },

    #[error("at most {max} players may sit at a table, got {count}")]
    TooManyPlayers { count: usize, max: usize },

    #[error("hands must start with at least one card")]
    EmptyHands,

    #[error("player {0} is seated twice")]
    DuplicatePlayer(String),

    #[error("dealing needs {needed} cards but the deck holds {available}")]
    NotEnoughCards { needed: usize, available: usize },
}

/// Why a play or draw was rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("{player} acted out of turn (current: {current})")]
    NotYourTurn { player: PlayerId, current: PlayerId },

    #[error("hand index {index} is out of range for a hand of {len} cards")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("{card} cannot follow {top} while the active color is {active}")]
    InvalidMove { card: Card, top: Card, active: Color },

    #[error("{card} needs a red, blue, green or yellow color choice")]
    MissingColorChoice { card: Card },

    #[error("{0} is not at this table")]
    UnknownSeat(PlayerId),

    #[error("the game is over: {winner} has won")]
    GameOver { winner: PlayerId },
}

impl MoveError {
    /// True for rejections the acting player caused by picking the wrong card.
    #[must_use]
    pub fn is_card_choice(&self) -> bool {
        matches!(self, Self::InvalidMove { .. } | Self::MissingColorChoice { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Face;

    #[test]
    fn test_messages() {
        let err = MoveError::IndexOutOfRange { index: 9, len: 3 };
        assert_eq!(err.to_string(), "hand index 9 is out of range for a hand of 3 cards");

        let err = SetupError::TooFewPlayers { count: 1, min: 2 };
        assert_eq!(err.to_string(), "need at least 2 players, got 1");

        let err = MoveError::GameOver { winner: PlayerId::new(0) };
        assert_eq!(err.to_string(), "the game is over: Seat 0 has won");
        assert!(!err.is_card_choice());

        assert_eq!(SetupError::EmptyHands.to_string(), "hands must start with at least one card");
    }

    #[test]
    fn test_card_choice_classification() {
        let card = Card::new(Color::Red, Face::Number(3));
        let top = Card::new(Color::Blue, Face::Number(5));
        assert!(MoveError::InvalidMove { card, top, active: Color::Blue }.is_card_choice());
        assert!(!MoveError::UnknownSeat(PlayerId::new(4)).is_card_choice());
    }
}
