//! Python bindings for the UNO engine.
//!
//! # Quick Start
//!
//! ```python
//! import uno_engine as uno
//!
//! table = uno.UnoTable(["alice"], bots=["UNO Bot 1", "UNO Bot 2"], seed=7)
//! print(table.hand("alice"))
//! print(table.draw("alice"))
//! for line in table.run_bots():
//!     print(line)
//! print(table.status())
//! ```

use pyo3::prelude::*;

mod py_table;

pub use py_table::*;

/// uno_engine: a UNO game engine with automated players.
#[pymodule]
fn uno_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyUnoTable>()?;
    Ok(())
}
