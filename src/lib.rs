//! # uno-engine
//!
//! A UNO game engine for any front end: chat bots, terminals, sockets,
//! Python notebooks.
//!
//! ## Design Principles
//!
//! 1. **Engine, not transport**: the engine returns outcomes and reports;
//!    front ends decide what to send where.
//!
//! 2. **Seeded randomness**: every shuffle and random color choice draws
//!    from an injected `GameRng`, so games replay exactly.
//!
//! 3. **Layered rules**: the base engine validates and applies single moves.
//!    Turn sequencing and action-card effects sit on top and can be
//!    switched between color-only and standard rules.
//!
//! ## Modules
//!
//! - `core`: seats, identities, configuration, actions, errors, RNG, `GameState`
//! - `cards`: card values, the legality predicate, the 108-card deck
//! - `zones`: draw and discard piles, reshuffle
//! - `effects`: Skip, Reverse, Draw2 and WildDraw4 effects
//! - `rules`: `RulesEngine` trait and the UNO turn driver
//! - `policy`: automated-player move selection
//! - `session`: live tables and the session registry
//!
//! ## Example
//!
//! ```
//! use uno_engine::{FirstPlayable, GameRng, Identity, Table, UnoConfig};
//!
//! let alice = Identity::human("alice");
//! let players = vec![alice.clone(), Identity::automated("UNO Bot 1")];
//! let mut table = Table::new(players, UnoConfig::default(), GameRng::new(7)).unwrap();
//!
//! table.draw(&alice).unwrap();
//! let bot_moves = table.run_automated(&FirstPlayable);
//! assert_eq!(bot_moves.len(), 1);
//! assert_eq!(table.state().current_player(), &alice);
//! ```

pub mod cards;
pub mod core;
pub mod effects;
pub mod policy;
pub mod rules;
pub mod session;
pub mod zones;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, Direction, DrawOutcome, EffectMode, GameRng, GameRngState, GameState,
    Identity, MoveError, PlayerId, PlayerMap, SetupError, TurnOrder, UnoConfig,
};

pub use crate::cards::{standard_deck, Card, Color, Face, ParseColorError, DECK_SIZE};

pub use crate::zones::{DiscardPile, DrawPile};

pub use crate::effects::{AppliedEffect, Effect, EffectResolver};

pub use crate::rules::{ActionOutcome, GameResult, RulesEngine, UnoRules};

pub use crate::policy::{Decision, FirstPlayable, PlayerPolicy};

pub use crate::session::{
    HandListing, SessionError, SessionStore, StatusReport, Table, TableError, TableEvent,
};
