//! The standard 108-card deck.

use super::card::{Card, Color, Face};

/// Cards in a standard deck.
pub const DECK_SIZE: usize = 108;

/// Build the standard deck in a fixed order.
///
/// Per concrete color: one 0, two each of 1-9, two each of Skip, Reverse
/// and Draw2. Then four Wild and four WildDraw4.
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);

    for color in Color::CONCRETE {
        deck.push(Card::new(color, Face::Number(0)));
        for n in 1..=9 {
            deck.push(Card::new(color, Face::Number(n)));
            deck.push(Card::new(color, Face::Number(n)));
        }
        for _ in 0..2 {
            deck.push(Card::new(color, Face::Skip));
            deck.push(Card::new(color, Face::Reverse));
            deck.push(Card::new(color, Face::DrawTwo));
        }
    }

    for _ in 0..4 {
        deck.push(Card::new(Color::Wild, Face::Wild));
        deck.push(Card::new(Color::Wild, Face::WildDrawFour));
    }

    deck
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(deck: &[Card], card: Card) -> usize {
        deck.iter().filter(|&&c| c == card).count()
    }

    #[test]
    fn test_deck_size() {
        assert_eq!(standard_deck().len(), DECK_SIZE);
    }

    #[test]
    fn test_deck_composition() {
        let deck = standard_deck();

        for color in Color::CONCRETE {
            assert_eq!(count(&deck, Card::new(color, Face::Number(0))), 1);
            for n in 1..=9 {
                assert_eq!(count(&deck, Card::new(color, Face::Number(n))), 2);
            }
            assert_eq!(count(&deck, Card::new(color, Face::Skip)), 2);
            assert_eq!(count(&deck, Card::new(color, Face::Reverse)), 2);
            assert_eq!(count(&deck, Card::new(color, Face::DrawTwo)), 2);
            assert_eq!(deck.iter().filter(|c| c.color == color).count(), 25);
        }

        assert_eq!(count(&deck, Card::new(Color::Wild, Face::Wild)), 4);
        assert_eq!(count(&deck, Card::new(Color::Wild, Face::WildDrawFour)), 4);
    }

    #[test]
    fn test_deck_is_deterministic() {
        assert_eq!(standard_deck(), standard_deck());
    }
}
