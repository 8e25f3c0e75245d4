//! Effect resolution.
//!
//! The resolver runs between a successful play and the normal turn advance.
//! Skipping moves the turn one extra seat here without counting a turn, so
//! after the rules layer advances the skipped seat has been passed over.

use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::GameState;

use super::{AppliedEffect, Effect};

/// Effects applied for one card.
pub type AppliedBatch = SmallVec<[AppliedEffect; 2]>;

/// Applies action-card effects to game state.
pub struct EffectResolver;

impl EffectResolver {
    /// Resolve every effect `card` carries.
    pub fn resolve_card(state: &mut GameState, card: &Card) -> AppliedBatch {
        Effect::for_card(card)
            .into_iter()
            .map(|effect| Self::resolve_single(state, effect))
            .collect()
    }

    fn resolve_single(state: &mut GameState, effect: Effect) -> AppliedEffect {
        let applied = match effect {
            Effect::SkipNext => Self::skip_next(state),
            // With two seats a reversal hands the turn straight back.
            Effect::Reverse if state.player_count() == 2 => Self::skip_next(state),
            Effect::Reverse => AppliedEffect::Reversed(state.reverse_direction()),
            Effect::DrawNext { count } => {
                let victim = state.next_seat();
                let drawn = match state.force_draw(victim, count) {
                    Ok(outcome) => outcome.drawn.len(),
                    Err(err) => {
                        tracing::warn!(%victim, %err, "forced draw failed");
                        0
                    }
                };
                AppliedEffect::ForcedDraw {
                    player: victim,
                    count: drawn,
                }
            }
        };

        tracing::debug!(?effect, %applied, "effect resolved");
        applied
    }

    fn skip_next(state: &mut GameState) -> AppliedEffect {
        let skipped = state.next_seat();
        state.skip_seat();
        AppliedEffect::Skipped(skipped)
    }
}
