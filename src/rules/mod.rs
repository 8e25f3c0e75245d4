//! Rules engine trait and the UNO turn driver.
//!
//! `GameState` validates and applies single moves. `UnoRules` strings them
//! into turns: play (and resolve effects when enabled), draw, or pass, then
//! hand the turn on. Front ends and automated players talk to this layer.

pub mod engine;

pub use engine::{ActionOutcome, GameResult, RulesEngine, UnoRules};
