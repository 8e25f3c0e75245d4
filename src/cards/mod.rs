//! Cards and the standard deck.
//!
//! - `card`: `Color`, `Face`, `Card` and the legality predicate
//! - `deck`: the fixed 108-card composition

pub mod card;
pub mod deck;

pub use card::{Card, Color, Face, ParseColorError};
pub use deck::{standard_deck, DECK_SIZE};
