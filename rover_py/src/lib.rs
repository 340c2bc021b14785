//! # rover_py
//!
//! Python bindings for the rover engine.

pub mod mission;
pub use mission::PyDirection;
pub use mission::PyMission;

use pyo3::prelude::*;

#[pymodule]
fn rover_py(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyDirection>()?;
    m.add_class::<PyMission>()?;
    Ok(())
}
