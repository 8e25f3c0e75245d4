//! Draw and discard piles.
//!
//! Both piles are ordered with the top at the end. They use `im::Vector`
//! so a `GameState` snapshot is cheap to clone.
//!
//! The discard pile stores its top card apart from the cards buried under
//! it. A live game always has a top card, so the pile can never be empty.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::GameRng;

/// Face-down stack players draw from.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawPile {
    cards: Vector<Card>,
}

impl DrawPile {
    /// Wrap cards in their current order; the last card is the top.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Shuffle the whole pile in place.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        let mut cards: Vec<Card> = self.cards.iter().copied().collect();
        rng.shuffle(&mut cards);
        self.cards = cards.into_iter().collect();
    }

    /// Take the top card.
    pub fn draw_top(&mut self) -> Option<Card> {
        self.cards.pop_back()
    }

    /// Rebuild an exhausted pile from everything under the discard top.
    ///
    /// The buried discards are shuffled and become the new pile; the discard
    /// pile keeps only its top card. Returns the number of cards recovered.
    pub fn reshuffle_from(&mut self, discard: &mut DiscardPile, rng: &mut GameRng) -> usize {
        let mut recovered = discard.take_buried();
        rng.shuffle(&mut recovered);
        let count = recovered.len();
        self.cards.extend(recovered);
        tracing::debug!(recovered = count, "reshuffled discard pile into draw pile");
        count
    }

    /// Cards from bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

/// Face-up pile of played cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscardPile {
    top: Card,
    buried: Vector<Card>,
}

impl DiscardPile {
    /// Start a pile with the initial flip.
    #[must_use]
    pub fn new(first: Card) -> Self {
        Self {
            top: first,
            buried: Vector::new(),
        }
    }

    /// The most recently played card.
    #[must_use]
    pub fn top(&self) -> Card {
        self.top
    }

    /// Play a card onto the pile.
    pub fn push(&mut self, card: Card) {
        let previous = std::mem::replace(&mut self.top, card);
        self.buried.push_back(previous);
    }

    /// Always at least 1.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buried.len() + 1
    }

    /// Remove every card under the top, oldest first.
    pub fn take_buried(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.buried).into_iter().collect()
    }

    /// Cards from bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.buried.iter().chain(std::iter::once(&self.top))
    }
}
