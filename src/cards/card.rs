//! Card values and the legality predicate.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::GameRng;

/// Card color. `Wild` appears on cards only; the active color is always concrete.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
    Wild,
}

impl Color {
    /// The colors a Wild card can name, in deck-building order.
    pub const CONCRETE: [Color; 4] = [Color::Red, Color::Blue, Color::Green, Color::Yellow];

    #[must_use]
    pub const fn is_concrete(self) -> bool {
        !matches!(self, Color::Wild)
    }

    /// Pick one of the four concrete colors uniformly.
    pub fn random(rng: &mut GameRng) -> Color {
        Self::CONCRETE[rng.gen_range_usize(0..Self::CONCRETE.len())]
    }

    fn emoji(self) -> &'static str {
        match self {
            Color::Red => "🔴",
            Color::Blue => "🔵",
            Color::Green => "🟢",
            Color::Yellow => "🟡",
            Color::Wild => "🃏",
        }
    }

    fn name(self) -> &'static str {
        match self {
            Color::Red => "Red",
            Color::Blue => "Blue",
            Color::Green => "Green",
            Color::Yellow => "Yellow",
            Color::Wild => "Wild",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Failure to read a color a player named.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not one of red, blue, green or yellow")]
pub struct ParseColorError(pub String);

impl FromStr for Color {
    type Err = ParseColorError;

    /// Parses a concrete color name, ignoring case. `Wild` is never a valid choice.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::CONCRETE
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseColorError(s.to_string()))
    }
}

/// Card face value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Face {
    /// 0 through 9.
    Number(u8),
    Skip,
    Reverse,
    DrawTwo,
    Wild,
    WildDrawFour,
}

impl Face {
    /// Skip, Reverse and the draw cards.
    #[must_use]
    pub const fn is_action(self) -> bool {
        !matches!(self, Face::Number(_) | Face::Wild)
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Face::Number(n) => write!(f, "{n}"),
            Face::Skip => f.write_str("Skip"),
            Face::Reverse => f.write_str("Reverse"),
            Face::DrawTwo => f.write_str("Draw2"),
            Face::Wild => f.write_str("Wild"),
            Face::WildDrawFour => f.write_str("WildDraw4"),
        }
    }
}

/// An immutable card. Equal cards are interchangeable; the deck holds duplicates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Card {
    pub color: Color,
    pub face: Face,
}

impl Card {
    #[must_use]
    pub const fn new(color: Color, face: Face) -> Self {
        Self { color, face }
    }

    #[must_use]
    pub const fn is_wild(&self) -> bool {
        matches!(self.color, Color::Wild)
    }

    /// Whether this card may follow `top` while `active` is the active color.
    ///
    /// Wild cards always may. Anything else must match the active color or
    /// the top card's face, so a Blue Skip follows a Red Skip.
    ///
    /// ```
    /// use uno_engine::cards::{Card, Color, Face};
    ///
    /// let top = Card::new(Color::Red, Face::Skip);
    /// assert!(Card::new(Color::Blue, Face::Skip).can_play(&top, Color::Red));
    /// assert!(!Card::new(Color::Blue, Face::Number(4)).can_play(&top, Color::Red));
    /// ```
    #[must_use]
    pub fn can_play(&self, top: &Card, active: Color) -> bool {
        self.is_wild() || self.color == active || self.face == top.face
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_wild() {
            write!(f, "{} {}", self.color.emoji(), self.face)
        } else {
            write!(f, "{} {} {}", self.color.emoji(), self.color, self.face)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wild_always_playable() {
        let top = Card::new(Color::Green, Face::Number(7));
        assert!(Card::new(Color::Wild, Face::Wild).can_play(&top, Color::Green));
        assert!(Card::new(Color::Wild, Face::WildDrawFour).can_play(&top, Color::Yellow));
    }

    #[test]
    fn test_match_by_active_color_not_top_color() {
        // A Wild on top named Blue: blue cards follow, red ones do not.
        let top = Card::new(Color::Wild, Face::Wild);
        assert!(Card::new(Color::Blue, Face::Number(2)).can_play(&top, Color::Blue));
        assert!(!Card::new(Color::Red, Face::Number(2)).can_play(&top, Color::Blue));
    }

    #[test]
    fn test_match_by_face() {
        let top = Card::new(Color::Red, Face::Number(5));
        assert!(Card::new(Color::Yellow, Face::Number(5)).can_play(&top, Color::Red));
        assert!(!Card::new(Color::Yellow, Face::Number(6)).can_play(&top, Color::Red));
    }

    #[test]
    fn test_action_faces_match_each_other() {
        let top = Card::new(Color::Red, Face::DrawTwo);
        assert!(Card::new(Color::Green, Face::DrawTwo).can_play(&top, Color::Red));
        assert!(!Card::new(Color::Green, Face::Reverse).can_play(&top, Color::Red));
    }

    #[test]
    fn test_display() {
        assert_eq!(Card::new(Color::Red, Face::Number(5)).to_string(), "🔴 Red 5");
        assert_eq!(Card::new(Color::Yellow, Face::DrawTwo).to_string(), "🟡 Yellow Draw2");
        assert_eq!(Card::new(Color::Wild, Face::WildDrawFour).to_string(), "🃏 WildDraw4");
    }

    #[test]
    fn test_parse_color() {
        assert_eq!("green".parse::<Color>(), Ok(Color::Green));
        assert_eq!("YELLOW".parse::<Color>(), Ok(Color::Yellow));
        assert_eq!(" Red ".parse::<Color>(), Ok(Color::Red));
        assert!("wild".parse::<Color>().is_err());
        assert!("purple".parse::<Color>().is_err());
    }

    #[test]
    fn test_random_color_is_concrete() {
        let mut rng = GameRng::new(3);
        for _ in 0..100 {
            assert!(Color::random(&mut rng).is_concrete());
        }
    }

    #[test]
    fn test_is_action() {
        assert!(Face::Skip.is_action());
        assert!(Face::WildDrawFour.is_action());
        assert!(!Face::Wild.is_action());
        assert!(!Face::Number(0).is_action());
    }
}
