//! Move selection for automated players.

mod automated;

pub use automated::{Decision, FirstPlayable, PlayerPolicy};
