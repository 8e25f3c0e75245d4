//! Table bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::cards::Color;
use crate::core::{EffectMode, GameRng, Identity, UnoConfig};
use crate::policy::FirstPlayable;
use crate::session::{Table, TableEvent};

fn to_py_err(err: impl std::fmt::Display) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Python wrapper for a live UNO table.
///
/// Humans are addressed by handle; automated players move only when
/// `run_bots` is called.
#[pyclass(name = "UnoTable")]
pub struct PyUnoTable {
    table: Table,
}

impl PyUnoTable {
    fn describe(event: TableEvent) -> String {
        event.to_string()
    }
}

#[pymethods]
impl PyUnoTable {
    /// Create a table.
    ///
    /// # Arguments
    /// - humans: Handles of human players, seated first
    /// - bots: Labels of automated players, seated after the humans
    /// - seed: RNG seed for deterministic games
    /// - standard_effects: Apply Skip/Reverse/Draw2/WildDraw4 effects
    #[new]
    #[pyo3(signature = (humans, bots = Vec::new(), seed = 42, standard_effects = false))]
    fn new(humans: Vec<String>, bots: Vec<String>, seed: u64, standard_effects: bool) -> PyResult<Self> {
        let players = humans
            .into_iter()
            .map(Identity::Human)
            .chain(bots.into_iter().map(Identity::Automated))
            .collect();
        let effects = if standard_effects {
            EffectMode::Standard
        } else {
            EffectMode::ColorOnly
        };
        let config = UnoConfig::default().with_effects(effects);
        let table = Table::new(players, config, GameRng::new(seed)).map_err(to_py_err)?;
        Ok(Self { table })
    }

    /// Play card number `number` (1-based, as shown by `hand`).
    #[pyo3(signature = (handle, number, color = None))]
    fn play(&mut self, handle: &str, number: usize, color: Option<&str>) -> PyResult<String> {
        let index = number
            .checked_sub(1)
            .ok_or_else(|| PyValueError::new_err("cards are numbered from 1"))?;
        let color = color.map(str::parse::<Color>).transpose().map_err(to_py_err)?;
        let who = Identity::human(handle);
        self.table.play(&who, index, color).map(Self::describe).map_err(to_py_err)
    }

    fn draw(&mut self, handle: &str) -> PyResult<String> {
        let who = Identity::human(handle);
        self.table.draw(&who).map(Self::describe).map_err(to_py_err)
    }

    fn pass_turn(&mut self, handle: &str) -> PyResult<String> {
        let who = Identity::human(handle);
        self.table.pass(&who).map(Self::describe).map_err(to_py_err)
    }

    /// Let automated players move until a human is up. Returns announcements.
    fn run_bots(&mut self) -> Vec<String> {
        self.table
            .run_automated(&FirstPlayable)
            .into_iter()
            .map(Self::describe)
            .collect()
    }

    /// A human's hand as display strings, in numbering order.
    fn hand(&self, handle: &str) -> PyResult<Vec<String>> {
        self.table
            .hand_listing(&Identity::human(handle))
            .map(|listing| listing.0.iter().map(ToString::to_string).collect())
            .ok_or_else(|| PyValueError::new_err(format!("{handle} is not seated at this table")))
    }

    fn status(&self) -> String {
        self.table.status().to_string()
    }

    /// Name of the winner, if the game is over.
    #[getter]
    fn winner(&self) -> Option<String> {
        self.table.winner().map(|w| w.name().to_string())
    }

    fn __repr__(&self) -> String {
        let state = self.table.state();
        format!(
            "UnoTable(players={}, turn={}, current={})",
            state.player_count(),
            state.turn_number(),
            state.current_player().name()
        )
    }
}
