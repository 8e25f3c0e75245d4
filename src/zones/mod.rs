//! Shared card piles.
//!
//! Hands live on `GameState`; the two shared piles live here along with the
//! reshuffle that moves cards from one to the other.

pub mod piles;

pub use piles::{DiscardPile, DrawPile};
