//! Action-card effects.
//!
//! The base engine treats every card the same way: it sets the active color
//! and nothing else. This layer adds what Skip, Reverse, Draw2 and WildDraw4
//! do to the turn order and to the next seat's hand:
//! - `Effect`: what a card does, independent of any game
//! - `EffectResolver`: applies effects to a `GameState`
//!
//! The rules layer consults it only under `EffectMode::Standard`, so games
//! with and without effects share the same engine.

mod effect;
mod resolver;

pub use effect::{AppliedEffect, Effect, EffectBatch};
pub use resolver::{AppliedBatch, EffectResolver};
