//! Core engine types: seats, identities, configuration, actions, errors,
//! RNG, and the game state itself.

pub mod action;
pub mod config;
pub mod error;
pub mod identity;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Action, ActionRecord};
pub use config::{EffectMode, TurnOrder, UnoConfig};
pub use error::{MoveError, SetupError};
pub use identity::Identity;
pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use state::{Direction, DrawOutcome, GameState};
