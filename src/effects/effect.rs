//! Effect definitions.
//!
//! Action cards translate to a short batch of effects. The translation is
//! fixed; whether it is applied at all is a table rule (`EffectMode`).

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use crate::cards::{Card, Face};
use crate::core::{Direction, PlayerId};

/// A gameplay effect of an action card, relative to the seat that played it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    /// The next seat loses its turn.
    SkipNext,
    /// Flip the direction of play. At a two-seat table this acts as `SkipNext`.
    Reverse,
    /// The next seat draws `count` cards.
    DrawNext { count: usize },
}

/// Effects of one card, in resolution order. Never more than two.
pub type EffectBatch = SmallVec<[Effect; 2]>;

impl Effect {
    /// Effects carried by `card`. Number and plain Wild cards carry none.
    ///
    /// ```
    /// use uno_engine::cards::{Card, Color, Face};
    /// use uno_engine::effects::Effect;
    ///
    /// let batch = Effect::for_card(&Card::new(Color::Red, Face::DrawTwo));
    /// assert_eq!(batch.as_slice(), &[Effect::DrawNext { count: 2 }, Effect::SkipNext]);
    /// ```
    #[must_use]
    pub fn for_card(card: &Card) -> EffectBatch {
        match card.face {
            Face::Skip => smallvec![Effect::SkipNext],
            Face::Reverse => smallvec![Effect::Reverse],
            Face::DrawTwo => smallvec![Effect::DrawNext { count: 2 }, Effect::SkipNext],
            Face::WildDrawFour => smallvec![Effect::DrawNext { count: 4 }, Effect::SkipNext],
            Face::Number(_) | Face::Wild => SmallVec::new(),
        }
    }
}

/// What resolving an effect actually did.
///
/// The resolver reports seats; front ends map them to names with
/// [`AppliedEffect::map_player`] before announcing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppliedEffect<P = PlayerId> {
    /// This player lost their turn.
    Skipped(P),
    /// Play now runs in this direction.
    Reversed(Direction),
    /// This player drew `count` cards.
    ForcedDraw { player: P, count: usize },
}

impl<P> AppliedEffect<P> {
    /// The same effect with its player replaced by `f(player)`.
    pub fn map_player<Q>(self, f: impl FnOnce(P) -> Q) -> AppliedEffect<Q> {
        match self {
            AppliedEffect::Skipped(player) => AppliedEffect::Skipped(f(player)),
            AppliedEffect::Reversed(direction) => AppliedEffect::Reversed(direction),
            AppliedEffect::ForcedDraw { player, count } => AppliedEffect::ForcedDraw {
                player: f(player),
                count,
            },
        }
    }
}

impl<P: std::fmt::Display> std::fmt::Display for AppliedEffect<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppliedEffect::Skipped(seat) => write!(f, "{seat} is skipped"),
            AppliedEffect::Reversed(Direction::Clockwise) => f.write_str("play runs clockwise"),
            AppliedEffect::Reversed(Direction::CounterClockwise) => {
                f.write_str("play runs counter-clockwise")
            }
            AppliedEffect::ForcedDraw { player, count } => write!(f, "{player} draws {count}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Color;

    #[test]
    fn test_number_and_wild_have_no_effects() {
        assert!(Effect::for_card(&Card::new(Color::Blue, Face::Number(4))).is_empty());
        assert!(Effect::for_card(&Card::new(Color::Wild, Face::Wild)).is_empty());
    }

    #[test]
    fn test_action_card_effects() {
        assert_eq!(
            Effect::for_card(&Card::new(Color::Green, Face::Skip)).as_slice(),
            &[Effect::SkipNext]
        );
        assert_eq!(
            Effect::for_card(&Card::new(Color::Green, Face::Reverse)).as_slice(),
            &[Effect::Reverse]
        );
        assert_eq!(
            Effect::for_card(&Card::new(Color::Wild, Face::WildDrawFour)).as_slice(),
            &[Effect::DrawNext { count: 4 }, Effect::SkipNext]
        );
    }

    #[test]
    fn test_map_player_names_seats() {
        let skipped = AppliedEffect::Skipped(PlayerId::new(1));
        assert_eq!(skipped.to_string(), "Seat 1 is skipped");

        let named = skipped.map_player(|seat| format!("p{}", seat.index()));
        assert_eq!(named, AppliedEffect::Skipped("p1".to_string()));
        assert_eq!(named.to_string(), "p1 is skipped");

        let drew = AppliedEffect::ForcedDraw { player: PlayerId::new(2), count: 4 }.map_player(|seat| seat.index());
        assert_eq!(drew, AppliedEffect::ForcedDraw { player: 2, count: 4 });
        assert_eq!(
            AppliedEffect::<PlayerId>::Reversed(Direction::Clockwise).map_player(|seat| seat.index()),
            AppliedEffect::Reversed(Direction::Clockwise)
        );
    }
}
